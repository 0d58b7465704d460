use super::Engine;

use async_trait::async_trait;

use crate::{
    api::CatalogAPI,
    entities::{Marathon, MarathonSummary},
    error::{not_found_error, Error},
    listing::{paginate, Filter, Page},
};

#[async_trait]
impl CatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_marathons(
        &self,
        filter: Filter,
        page: usize,
    ) -> Result<Page<MarathonSummary>, Error> {
        let matching = filter.apply(self.catalog.all());
        let page = paginate(matching, page)?;

        Ok(page.map(Marathon::summary))
    }

    #[tracing::instrument(skip(self))]
    async fn find_marathon(&self, token: String) -> Result<Marathon, Error> {
        let marathon = self
            .catalog
            .find_by_token(&token)
            .ok_or_else(not_found_error)?;

        Ok(marathon.clone())
    }
}
