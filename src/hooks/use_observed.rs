use std::rc::Rc;

use yew::prelude::*;

use crate::state::Observable;

/// Re-renderiza el componente cada vez que `target` notifica un cambio
#[hook]
pub fn use_observed<O>(target: &O)
where
    O: Observable + Clone + 'static,
{
    let update = use_force_update();
    let target = target.clone();
    use_effect_with((), move |_| {
        let id = target.observe(Rc::new(move || update.force_update()));
        move || target.unobserve(id)
    });
}
