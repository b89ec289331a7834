use yew::prelude::*;
use crate::components::{
    other_services::{OtherServices, ServiceKind},
    service_bento::ServiceBento,
};
use crate::enquiry::{use_enquiry, EntityRef};

fn blurb(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::PcdFranchise => "Run a monopoly-rights PCD franchise backed by our complete product portfolio and promotional support.",
        ServiceKind::PrivateLabel => "Launch your own brand on products we manufacture, test and pack to your specification.",
        ServiceKind::CustomFormulations => "Work with our R&D team to develop formulations that exist nowhere else.",
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub kind: ServiceKind,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let enquiry = use_enquiry();
    let kind = props.kind;

    let on_enquire = Callback::from(move |_: MouseEvent| {
        enquiry.set_subject(EntityRef::named(kind.title()));
    });

    html! {
        <div class="service-page">
            <section class="service-hero">
                <h1>{ kind.title() }</h1>
                <p>{ blurb(kind) }</p>
                <button class="hero-cta" onclick={on_enquire}>{"Enquire about this service"}</button>
            </section>
            <ServiceBento />
            <OtherServices />
        </div>
    }
}
