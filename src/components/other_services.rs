use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::motion::{translate_y, use_scroll_offset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    PcdFranchise,
    PrivateLabel,
    CustomFormulations,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::PcdFranchise,
        ServiceKind::PrivateLabel,
        ServiceKind::CustomFormulations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ServiceKind::PcdFranchise => "PCD Franchise",
            ServiceKind::PrivateLabel => "Private Label",
            ServiceKind::CustomFormulations => "Custom Formulations",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ServiceKind::PcdFranchise => Route::PcdFranchise,
            ServiceKind::PrivateLabel => Route::PrivateLabel,
            ServiceKind::CustomFormulations => Route::CustomFormulations,
        }
    }

    pub fn from_route(route: &Route) -> Option<ServiceKind> {
        ServiceKind::ALL.into_iter().find(|kind| &kind.route() == route)
    }
}

/// Every service except the one currently shown.
pub fn other_services(current: Option<ServiceKind>) -> Vec<ServiceKind> {
    ServiceKind::ALL
        .into_iter()
        .filter(|kind| Some(*kind) != current)
        .collect()
}

#[function_component(OtherServices)]
pub fn other_services_section() -> Html {
    let current = use_route::<Route>().and_then(|route| ServiceKind::from_route(&route));
    let heading = use_node_ref();
    let offset = use_scroll_offset(heading.clone(), -50.0, 50.0);

    html! {
        <section class="other-services">
            <div class="section-heading">
                <h1 ref={heading} style={translate_y(offset)}>
                    {"VIEW OUR"}<br />{"OTHER SERVICES"}
                </h1>
            </div>
            <div class="other-services-cards reveal-up">
                { for other_services(current).into_iter().map(|kind| html! {
                    <div class="service-card-link" key={kind.title()}>
                        <Link<Route> to={kind.route()}>
                            <h1>{ kind.title() }</h1>
                        </Link<Route>>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_service_is_left_out() {
        assert_eq!(
            other_services(Some(ServiceKind::PcdFranchise)),
            vec![ServiceKind::PrivateLabel, ServiceKind::CustomFormulations]
        );
        assert_eq!(
            other_services(Some(ServiceKind::CustomFormulations)),
            vec![ServiceKind::PcdFranchise, ServiceKind::PrivateLabel]
        );
    }

    #[test]
    fn non_service_pages_list_everything() {
        assert_eq!(other_services(None).len(), 3);
        assert_eq!(ServiceKind::from_route(&Route::Home), None);
        assert_eq!(ServiceKind::from_route(&Route::PrivateLabel), Some(ServiceKind::PrivateLabel));
    }
}
