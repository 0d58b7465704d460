use crate::map::MapTarget;
use crate::pages::{escape, layout, map_block, openlayers_head};

pub fn landing_page(target: &MapTarget) -> String {
    let element = escape(&target.element);

    let body = format!(
        r#"<div class="text-center py-4">
  <h1 class="text-center mb-4">Карта Марафонов России</h1>
</div>
<div class="container flex-grow-1 d-flex flex-column position-relative">
  <form id="{element}-search" class="mb-3 d-flex">
    <input type="text" class="form-control me-2" placeholder="Поиск марафона по городу..." />
    <button type="submit" class="btn btn-secondary">Найти</button>
  </form>
  <div id="{element}-loading" class="position-absolute top-50 start-50 translate-middle bg-white p-3 rounded shadow" style="z-index: 10;">
    <div class="spinner-border text-primary" role="status">
      <span class="visually-hidden">Загрузка...</span>
    </div>
  </div>
  {map}
</div>"#,
        element = element,
        map = map_block(target, 600),
    );

    layout("Карта Марафонов России", &body, &openlayers_head())
}
