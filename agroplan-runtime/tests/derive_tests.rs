use agroplan_runtime::{Action, ActionCategory};

#[derive(Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
enum FieldAction {
    SurveyStart,
    SurveyDidFinish(u32),
    SoilDidLoad { depth_cm: u16 },
    PlotNext,
    PlotPrev,
    #[action(category = "ui")]
    Quit,
    #[action(skip_category)]
    IrrigationSet(bool),
    Tick,
}

#[derive(Action, Clone, Debug)]
enum PlainAction {
    Ping,
    Echo(String),
}

#[test]
fn test_name_covers_every_variant_shape() {
    assert_eq!(FieldAction::SurveyStart.name(), "SurveyStart");
    assert_eq!(FieldAction::SurveyDidFinish(3).name(), "SurveyDidFinish");
    assert_eq!(FieldAction::SoilDidLoad { depth_cm: 30 }.name(), "SoilDidLoad");
    assert_eq!(PlainAction::Echo("hi".into()).name(), "Echo");
    assert_eq!(PlainAction::Ping.name(), "Ping");
}

#[test]
fn test_inferred_categories_group_intent_and_result() {
    assert_eq!(FieldAction::SurveyStart.category(), Some("survey"));
    assert_eq!(FieldAction::SurveyDidFinish(1).category(), Some("survey"));
    assert_eq!(FieldAction::SoilDidLoad { depth_cm: 10 }.category(), Some("soil"));
    assert_eq!(FieldAction::PlotNext.category(), Some("plot"));
    assert_eq!(FieldAction::Tick.category(), None);
}

#[test]
fn test_category_attributes() {
    assert_eq!(FieldAction::Quit.category(), Some("ui"));
    assert_eq!(FieldAction::IrrigationSet(true).category(), None);
}

#[test]
fn test_category_predicates() {
    assert!(FieldAction::PlotPrev.is_plot());
    assert!(FieldAction::SurveyDidFinish(2).is_survey());
    assert!(!FieldAction::Tick.is_survey());
    assert!(FieldAction::Quit.is_ui());
}

#[test]
fn test_trait_category_matches_inherent() {
    fn via_trait<A: ActionCategory>(action: &A) -> Option<&'static str> {
        action.category()
    }
    assert_eq!(via_trait(&FieldAction::PlotNext), Some("plot"));
}
