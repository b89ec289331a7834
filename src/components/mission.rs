use yew::prelude::*;
use crate::components::motion::{translate_x, use_scroll_offset};

#[derive(Properties, PartialEq, Clone)]
pub struct MissionProps {
    pub subhead_vm1: String,
    pub subhead_vm2: String,
    #[prop_or_default]
    pub text_vm1: Option<String>,
    #[prop_or_default]
    pub text_vm2: Option<String>,
    pub image_vm: String,
    pub image_alt_vm: String,
}

/// Paragraphs are separated by `|` in the stored copy.
pub fn paragraphs(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) => text.split('|').map(|p| p.trim().to_string()).collect(),
        None => vec!["This is about".to_string()],
    }
}

fn column(subhead: &str, text: Option<&str>) -> Html {
    html! {
        <div class="mission-column">
            <h2>{ subhead }</h2>
            <p>
                { for paragraphs(text).into_iter().map(|para| html! {
                    <>{ para }<br /><br /></>
                }) }
            </p>
        </div>
    }
}

#[function_component(Mission)]
pub fn mission(props: &MissionProps) -> Html {
    let heading = use_node_ref();
    let offset = use_scroll_offset(heading.clone(), -150.0, 0.0);

    html! {
        <section class="mission">
            <h1 ref={heading} style={translate_x(offset)}>{"We value our mission"}</h1>
            <div class="mission-body">
                { column(&props.subhead_vm1, props.text_vm1.as_deref()) }
                <div class="mission-image">
                    <img src={props.image_vm.clone()} alt={props.image_alt_vm.clone()} width="800" height="600" />
                </div>
                { column(&props.subhead_vm2, props.text_vm2.as_deref()) }
            </div>
        </section>
    }
}
