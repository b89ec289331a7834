use yew::prelude::*;
use crate::components::{certification::Certification, mission::Mission};

const VISION: &str = "To be the most trusted manufacturing partner for healthcare brands across India.|We build every formulation as if our own name were on the label.";
const MISSION: &str = "Deliver consistent, certified quality at every batch size.|Keep research, compliance and turnaround working for our partners, not against them.";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About Maxnova Healthcare"}</h1>
                <p>{"A WHO-GMP aligned manufacturer serving pharma brands with derma, cosmetic, nutraceutical and ayurvedic products."}</p>
            </section>
            <Mission
                subhead_vm1="Our Vision"
                subhead_vm2="Our Mission"
                text_vm1={Some(VISION.to_string())}
                text_vm2={Some(MISSION.to_string())}
                image_vm="/images/mission.webp"
                image_alt_vm="Maxnova manufacturing floor"
            />
            <Certification />
        </div>
    }
}
