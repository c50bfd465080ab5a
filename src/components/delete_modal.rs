use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub product: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub deleting: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmación de borrado. Un error no cierra el modal.
#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_backdrop = props.on_cancel.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" onclick={stop}>
                <h2>{"Delete product"}</h2>
                <p>{"Are you sure you want to delete "}<strong>{props.product.clone()}</strong>{"?"}</p>
                if let Some(error) = &props.error {
                    <div class="form-error" role="alert">{error.clone()}</div>
                }
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel} disabled={props.deleting}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn-danger" onclick={on_confirm} disabled={props.deleting}>
                        { if props.deleting { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
