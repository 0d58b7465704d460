/// Page-side half of the map: mounts through `/api/maps`, draws what the
/// server returns and forwards clicks and searches. Expects `MAP_TARGET`.
pub const MAP_SCRIPT: &str = r#"
(function () {
  const target = MAP_TARGET;
  const element = document.getElementById(target.element);
  const popupElement = document.getElementById(target.element + '-popup');
  const searchForm = document.getElementById(target.element + '-search');
  const loading = document.getElementById(target.element + '-loading');
  const json = { 'Content-Type': 'application/json' };
  let mapId = null;
  let map = null;
  let overlay = null;

  function showView(view) {
    map.getView().setCenter(ol.proj.fromLonLat(view.center));
    map.getView().setZoom(view.zoom);
  }

  function currentView() {
    const view = map.getView();
    const size = map.getSize();
    return {
      view: { center: ol.proj.toLonLat(view.getCenter()), zoom: view.getZoom() },
      viewport: { width: size[0], height: size[1] },
    };
  }

  fetch('/api/maps', {
    method: 'POST',
    headers: json,
    body: JSON.stringify({
      target: target,
      viewport: { width: element.clientWidth, height: element.clientHeight },
    }),
  })
    .then((response) => response.json())
    .then((state) => {
      mapId = state.id;
      map = new ol.Map({
        target: element,
        layers: [new ol.layer.Tile({ source: new ol.source.XYZ({ url: state.tile_url }) })],
        view: new ol.View({ center: ol.proj.fromLonLat(state.view.center), zoom: state.view.zoom }),
      });

      const features = state.markers.map((marker) => {
        const feature = new ol.Feature({ geometry: new ol.geom.Point(ol.proj.fromLonLat(marker.position)) });
        feature.setId(marker.id);
        feature.setStyle(new ol.style.Style({
          image: new ol.style.Icon({ src: marker.icon.src, scale: marker.icon.scale }),
        }));
        return feature;
      });
      map.addLayer(new ol.layer.Vector({ source: new ol.source.Vector({ features: features }) }));

      overlay = new ol.Overlay({ element: popupElement, positioning: 'bottom-center', stopEvent: false });
      map.addOverlay(overlay);

      map.on('click', (event) => {
        fetch('/api/maps/' + mapId + '/click', {
          method: 'POST',
          headers: json,
          body: JSON.stringify({ pixel: event.pixel, sync: currentView() }),
        })
          .then((response) => {
            if (response.status === 404) {
              // Released on the server; a reload mounts a fresh map.
              window.location.reload();
              return null;
            }
            return response.ok ? response.json() : null;
          })
          .then((result) => {
            if (result && result.popup.state === 'shown') {
              overlay.setPosition(ol.proj.fromLonLat(result.popup.position));
              popupElement.innerHTML = result.html;
              popupElement.style.display = 'block';
            } else {
              popupElement.style.display = 'none';
            }
          });
      });

      if (loading) {
        loading.style.display = 'none';
      }
    });

  if (searchForm) {
    searchForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const query = searchForm.querySelector('input').value.trim();
      if (!query || !mapId) {
        return;
      }
      fetch('/api/maps/' + mapId + '/search', {
        method: 'POST',
        headers: json,
        body: JSON.stringify({ query: query }),
      }).then((response) =>
        response.json().then((body) => {
          if (response.ok) {
            showView(body.view);
          } else if (response.status !== 409) {
            alert(body.error);
          }
        })
      );
    });
  }

  window.addEventListener('pagehide', (event) => {
    // Pages kept in the back/forward cache come back with the same map.
    if (mapId && !event.persisted) {
      fetch('/api/maps/' + mapId, { method: 'DELETE', keepalive: true });
    }
  });
})();
"#;
