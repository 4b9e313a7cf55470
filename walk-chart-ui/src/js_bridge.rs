//! Typed wrappers around the Leaflet site map.
//!
//! The map functions live in `assets/js/site-map.js`, are evaluated as
//! globals (no ES modules) once Leaflet has loaded, and are exposed via
//! `window.*`. Marker clicks travel back to Rust over a `document::eval`
//! channel so they are handled inside the Dioxus runtime.

use crate::config::MapConfig;
use dioxus::document::{self, Eval};
use walk_db::models::SiteMarker;

// Embed the map JS at compile time
static SITE_MAP_JS: &str = include_str!("../assets/js/site-map.js");

/// Waits for the map script, pulls its arguments off the eval channel,
/// renders, then forwards every marker click as a site id string.
static RENDER_SITE_MAP_JS: &str = r#"
    const [containerId, markers, config] = await dioxus.recv();
    await new Promise(function (resolve) {
        var poll = setInterval(function () {
            if (window.__walkMapReady &&
                typeof window.renderSiteMap !== 'undefined' &&
                document.getElementById(containerId)) {
                clearInterval(poll);
                resolve();
            }
        }, 100);
    });
    try {
        window.renderSiteMap(containerId, markers, config, function (siteId) {
            dioxus.send(siteId);
        });
    } catch (e) { console.error('[Walk] renderSiteMap error:', e); }
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Walk JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map script with a wait-for-Leaflet polling loop.
///
/// `site-map.js` defines its functions via `function` declarations. To make
/// them global (not block-scoped inside the setInterval callback) the script
/// is evaluated at global scope via indirect eval once `L` exists, then each
/// function is promoted to `window.*` explicitly.
pub fn init_map_script() {
    let store_js = format!(
        "window.__walkMapScript = {};",
        serde_json::to_string(SITE_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__walkMapReady) { return; }
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined' && window.__walkMapScript) {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__walkMapScript);
                    delete window.__walkMapScript;
                    if (typeof renderSiteMap !== 'undefined') window.renderSiteMap = renderSiteMap;
                    if (typeof destroySiteMap !== 'undefined') window.destroySiteMap = destroySiteMap;
                    window.__walkMapReady = true;
                    console.log('Walk site map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the site map into `container_id`.
///
/// Returns the eval channel; each `recv::<String>()` yields the id of a
/// clicked marker.
pub fn render_site_map(container_id: &str, markers: &[SiteMarker], config: &MapConfig) -> Eval {
    let eval = document::eval(RENDER_SITE_MAP_JS);
    if let Err(e) = eval.send(serde_json::json!([container_id, markers, config])) {
        log::error!("js_bridge: failed to send site map data: {:?}", e);
    }
    eval
}

/// Tear down the Leaflet map in the given container.
pub fn destroy_site_map(container_id: &str) {
    let container = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        "if (window.destroySiteMap) window.destroySiteMap({});",
        container
    ));
}
