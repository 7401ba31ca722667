use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("portal-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Whether an open-change event from the dialog is a dismissal.
fn is_dismissal(next_open: bool) -> bool {
    !next_open
}

/// Modal overlay shown after a submission.
///
/// Visibility is owned by the caller. Backdrop clicks and Escape are
/// reported through `on_close`; the caller decides whether to hide it.
#[component]
pub fn SubmitPortal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |next: bool| {
                if is_dismissal(next) {
                    on_close.call(());
                }
            },
            DialogContent { class: "portal-content submit-portal", {children} }
        }
    }
}
