//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded from its CDN at startup and exposed as `window.Plotly`.
//! Figures are handed over as JSON object literals produced by
//! `bbank_chart::PlotSpec`.

/// Plotly.js bundle injected by [`init_plotly`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Polls run every 100 ms and give up after this many tries (~15 s).
pub const MAX_POLLS: u32 = 150;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly script once and flag `window.__bbankPlotlyReady` when it
/// has loaded. Call once at app startup.
pub fn init_plotly() {
    call_js(&init_script());
}

fn init_script() -> String {
    format!(
        r#"
        (function() {{
            if (!window.Plotly && !document.getElementById('plotly-js')) {{
                var s = document.createElement('script');
                s.id = 'plotly-js';
                s.src = '{PLOTLY_CDN}';
                document.head.appendChild(s);
            }}
            var tries = 0;
            var waitForPlotly = setInterval(function() {{
                if (typeof window.Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__bbankPlotlyReady = true;
                    console.log('Plotly ready');
                }} else if (++tries >= {MAX_POLLS}) {{
                    clearInterval(waitForPlotly);
                    console.warn('[bbank] Plotly did not load from {PLOTLY_CDN}');
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Draw (or redraw in place) a figure into the element with `container_id`.
///
/// Polls until Plotly has loaded and the container exists, for at most
/// [`MAX_POLLS`] tries. `spec_json` must be a serialized `PlotSpec`; it is
/// embedded as an object literal.
pub fn render_plot(container_id: &str, spec_json: &str) {
    call_js(&render_script(container_id, spec_json));
}

fn render_script(container_id: &str, spec_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var spec = {spec_json};
            var tries = 0;
            var poll = setInterval(function() {{
                var el = document.getElementById('{container_id}');
                if (window.__bbankPlotlyReady && el) {{
                    clearInterval(poll);
                    try {{
                        window.Plotly.react(el, spec.data, spec.layout, spec.config);
                    }} catch(e) {{ console.error('[bbank] Plotly.react error:', e); }}
                }} else if (++tries >= {MAX_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[bbank] gave up drawing {container_id}');
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Remove a figure and its event listeners from the container.
pub fn purge_plot(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el && window.Plotly) {{ window.Plotly.purge(el); }}",
        container_id
    ));
}

/// Toggle the `dark` class on `<html>` so page-level CSS can follow the theme.
pub fn set_document_theme(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        root.set_class_name(if dark { "dark" } else { "" });
    }
}
