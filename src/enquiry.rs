use std::rc::Rc;
use yew::prelude::*;
use log::info;

/// What an enquiry is about. Every part is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityRef {
    pub company_name: Option<String>,
    pub category_name: Option<String>,
    pub name: Option<String>,
}

impl EntityRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    /// Shallow merge: fields present in `other` win, the rest are kept.
    pub fn merge(&self, other: EntityRef) -> EntityRef {
        EntityRef {
            company_name: other.company_name.or_else(|| self.company_name.clone()),
            category_name: other.category_name.or_else(|| self.category_name.clone()),
            name: other.name.or_else(|| self.name.clone()),
        }
    }

    /// "company > category > name" using only the parts that are present.
    pub fn breadcrumb(&self) -> String {
        [&self.company_name, &self.category_name, &self.name]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryState {
    pub is_open: bool,
    pub subject: Option<EntityRef>,
    /// Bumped on every toggle; mounted forms clear themselves when it moves.
    pub reset_epoch: u32,
}

pub enum EnquiryAction {
    Toggle,
    SetSubject(EntityRef),
}

impl Reducible for EnquiryState {
    type Action = EnquiryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EnquiryAction::Toggle => Rc::new(EnquiryState {
                is_open: !self.is_open,
                subject: self.subject.clone(),
                reset_epoch: self.reset_epoch.wrapping_add(1),
            }),
            EnquiryAction::SetSubject(entity) => {
                let subject = self.subject.clone().unwrap_or_default().merge(entity);
                Rc::new(EnquiryState {
                    is_open: true,
                    subject: Some(subject),
                    reset_epoch: self.reset_epoch,
                })
            }
        }
    }
}

/// The subject line shown above the form.
pub fn subject_line(subject: Option<&EntityRef>) -> String {
    match subject.map(EntityRef::breadcrumb) {
        Some(line) if !line.is_empty() => line,
        _ => "General Form".to_string(),
    }
}

/// Narrow read/write view of the enquiry state handed to consumers.
#[derive(Clone, PartialEq)]
pub struct EnquiryHandle {
    inner: UseReducerHandle<EnquiryState>,
}

impl EnquiryHandle {
    pub fn is_open(&self) -> bool {
        self.inner.is_open
    }

    pub fn subject(&self) -> Option<&EntityRef> {
        self.inner.subject.as_ref()
    }

    pub fn reset_epoch(&self) -> u32 {
        self.inner.reset_epoch
    }

    pub fn toggle(&self) {
        self.inner.dispatch(EnquiryAction::Toggle);
    }

    pub fn set_subject(&self, entity: EntityRef) {
        info!("Enquiry subject set: {:?}", entity);
        self.inner.dispatch(EnquiryAction::SetSubject(entity));
    }

    pub fn toggle_callback<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.toggle())
    }
}

#[derive(Properties, PartialEq)]
pub struct EnquiryProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EnquiryProvider)]
pub fn enquiry_provider(props: &EnquiryProviderProps) -> Html {
    let state = use_reducer(EnquiryState::default);
    let handle = EnquiryHandle { inner: state };

    html! {
        <ContextProvider<EnquiryHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<EnquiryHandle>>
    }
}

/// Panics when called outside `<EnquiryProvider>`; that is a wiring bug.
#[hook]
pub fn use_enquiry() -> EnquiryHandle {
    use_context::<EnquiryHandle>().expect("use_enquiry must be used under <EnquiryProvider>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: EnquiryState, actions: Vec<EnquiryAction>) -> EnquiryState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn company(name: &str) -> EntityRef {
        EntityRef { company_name: Some(name.to_string()), ..Default::default() }
    }

    #[test]
    fn starts_closed_without_subject() {
        let state = EnquiryState::default();
        assert!(!state.is_open);
        assert!(state.subject.is_none());
    }

    #[test]
    fn set_subject_merges_in_order_and_opens() {
        let state = apply(
            EnquiryState::default(),
            vec![
                EnquiryAction::SetSubject(EntityRef::named("A")),
                EnquiryAction::SetSubject(company("B")),
            ],
        );
        assert!(state.is_open);
        assert_eq!(
            state.subject,
            Some(EntityRef {
                company_name: Some("B".to_string()),
                category_name: None,
                name: Some("A".to_string()),
            })
        );
    }

    #[test]
    fn later_fields_overwrite_earlier_ones() {
        let state = apply(
            EnquiryState::default(),
            vec![
                EnquiryAction::SetSubject(EntityRef::named("A")),
                EnquiryAction::SetSubject(EntityRef::named("C")),
            ],
        );
        assert_eq!(state.subject.and_then(|s| s.name), Some("C".to_string()));
    }

    #[test]
    fn set_subject_keeps_overlay_open() {
        let opened = apply(EnquiryState::default(), vec![EnquiryAction::Toggle]);
        let state = apply(opened, vec![EnquiryAction::SetSubject(company("B"))]);
        assert!(state.is_open);
    }

    #[test]
    fn toggle_twice_restores_open_flag() {
        for start in [false, true] {
            let initial = EnquiryState { is_open: start, ..Default::default() };
            let state = apply(initial, vec![EnquiryAction::Toggle, EnquiryAction::Toggle]);
            assert_eq!(state.is_open, start);
        }
    }

    #[test]
    fn closing_retains_subject_and_bumps_reset_epoch() {
        let state = apply(
            EnquiryState::default(),
            vec![EnquiryAction::SetSubject(EntityRef::named("A")), EnquiryAction::Toggle],
        );
        assert!(!state.is_open);
        assert_eq!(state.subject, Some(EntityRef::named("A")));
        assert_eq!(state.reset_epoch, 1);
    }

    #[test]
    fn subject_line_falls_back_to_general_form() {
        assert_eq!(subject_line(None), "General Form");
        assert_eq!(subject_line(Some(&EntityRef::default())), "General Form");
        let full = EntityRef {
            company_name: Some("Maxnova".to_string()),
            category_name: Some("Derma".to_string()),
            name: Some("Cream".to_string()),
        };
        assert_eq!(subject_line(Some(&full)), "Maxnova > Derma > Cream");
        assert_eq!(subject_line(Some(&company("Maxnova"))), "Maxnova");
    }
}
