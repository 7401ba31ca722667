use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// DOM events that count as an interaction.
pub const OUTSIDE_CLICK_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Global pointer listener scoped to one element.
///
/// The listener lives in the document until [`dispose`](Self::dispose) is
/// called or the subscription is dropped, whichever comes first. Disposing
/// twice is a no-op.
#[derive(Debug)]
pub struct OutsideClickSubscription {
    container_id: String,
    disposed: Cell<bool>,
}

impl OutsideClickSubscription {
    fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            disposed: Cell::new(false),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Remove the document listeners.
    pub fn dispose(&self) {
        if !self.disposed.replace(true) {
            document::eval(&dispose_script(&self.container_id));
        }
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Registry key on `window`, shared by the listen and dispose scripts.
const REGISTRY: &str = "window.__outsideClickListeners";

/// Whether a pointer event should dismiss the element.
///
/// Events are ignored while the element is not mounted and when their target
/// lies inside it.
pub fn is_outside_interaction(container_mounted: bool, target_inside: bool) -> bool {
    container_mounted && !target_inside
}

/// JS installing one listener per event for `container_id`.
///
/// Each event is reported as `[mounted, inside]`.
fn listen_script(container_id: &str) -> String {
    let events: Vec<String> = OUTSIDE_CLICK_EVENTS
        .iter()
        .map(|event| format!("document.addEventListener({event:?}, listener);"))
        .collect();
    format!(
        r#"
        const id = {container_id:?};
        const registry = ({REGISTRY} = {REGISTRY} || {{}});
        const listener = (event) => {{
            const el = document.getElementById(id);
            dioxus.send([!!el, !!el && el.contains(event.target)]);
        }};
        registry[id] = listener;
        {}
        "#,
        events.join("\n        ")
    )
}

fn dispose_script(container_id: &str) -> String {
    let events: Vec<String> = OUTSIDE_CLICK_EVENTS
        .iter()
        .map(|event| format!("document.removeEventListener({event:?}, listener);"))
        .collect();
    format!(
        r#"
        const registry = {REGISTRY} || {{}};
        const listener = registry[{container_id:?}];
        if (listener) {{
            {}
            delete registry[{container_id:?}];
        }}
        "#,
        events.join("\n            ")
    )
}

/// Call `on_outside` whenever a pointer or touch interaction starts outside
/// the element with id `container_id`.
///
/// Listeners are registered when the calling component mounts and removed
/// when it unmounts.
pub fn use_outside_click(container_id: &str, on_outside: Callback<()>) {
    let id = container_id.to_string();
    let subscription = use_hook(move || {
        let subscription = Rc::new(OutsideClickSubscription::new(id));
        let listener = subscription.clone();
        spawn(async move {
            let mut eval = document::eval(&listen_script(listener.container_id()));
            while let Ok((mounted, inside)) = eval.recv::<(bool, bool)>().await {
                if listener.is_disposed() {
                    break;
                }
                if is_outside_interaction(mounted, inside) {
                    on_outside.call(());
                }
            }
        });
        subscription
    });

    use_drop(move || subscription.dispose());
}
