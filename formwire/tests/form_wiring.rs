//! End-to-end wiring tests across the whole stack: schema resolution,
//! session state, context propagation, and rendered accessibility
//! attributes.

use std::cell::RefCell;
use std::rc::Rc;

use formwire::prelude::*;
use serde_json::{json, Map, Value};

fn username_schema() -> SchemaSource {
    SchemaSource::from(json!({
        "type": "object",
        "properties": {
            "username": {
                "type": "string",
                "minLength": 2,
                "errorMessage": "Username must be at least 2 characters."
            }
        },
        "required": ["username"]
    }))
}

fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("username".to_string(), json!(""));
    map
}

fn signup_form(submitted: &Rc<RefCell<Vec<Map<String, Value>>>>) -> Form {
    let sink = Rc::clone(submitted);
    Form::new(username_schema())
        .unwrap()
        .default_values(defaults())
        .on_submit(move |values| sink.borrow_mut().push(values.clone()))
        .child(
            Field::new("username")
                .child(FormLabel::new().text("Username"))
                .child(FormControl::new().child(Element::new("input").attr("type", "text")))
                .child(FormDescription::new().text("Your public name."))
                .child(FormMessage::new()),
        )
}

fn attr_value(html: &str, name: &str) -> Vec<String> {
    let marker = format!("{name}=\"");
    let mut out = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&marker) {
        let start = pos + marker.len();
        let end = rest[start..].find('"').unwrap();
        out.push(rest[start..start + end].to_string());
        rest = &rest[start + end..];
    }
    out
}

#[test]
fn derived_ids_are_consistent_and_stable_across_renders() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let form = signup_form(&submitted);

    let first = form.render().unwrap().to_html();
    let second = form.render().unwrap().to_html();
    assert_eq!(first, second, "re-render must not regenerate ids");

    let label_for = attr_value(&first, "for").pop().unwrap();
    let control_id = attr_value(&first, "id")
        .into_iter()
        .find(|id| id.ends_with("-form-item"))
        .unwrap();
    assert_eq!(label_for, control_id);

    let base = control_id.strip_suffix("-form-item").unwrap().to_string();
    assert!(first.contains(&format!("{base}-form-item-description")));
    // No error yet, so the message element is absent but the description
    // id is still derived from the same base.
    let described = attr_value(&first, "aria-describedby").pop().unwrap();
    assert_eq!(described, format!("{base}-form-item-description"));
}

#[test]
fn empty_required_field_blocks_submit_and_shows_message() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let mut form = signup_form(&submitted);

    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert!(submitted.borrow().is_empty());

    let html = form.render().unwrap().to_html();
    assert!(html.contains("Username must be at least 2 characters."));

    let described = attr_value(&html, "aria-describedby").pop().unwrap();
    let parts: Vec<&str> = described.split(' ').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].ends_with("-form-item-description"));
    assert!(parts[1].ends_with("-form-item-message"));
    assert!(html.contains(r#"aria-invalid="true""#));
}

#[test]
fn valid_value_submits_once_and_clears_error() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let mut form = signup_form(&submitted);

    form.submit();
    assert!(form
        .render()
        .unwrap()
        .to_html()
        .contains("Username must be at least 2 characters."));

    form.session().set_value("username", json!("Alice"));
    assert_eq!(form.submit(), SubmitOutcome::Accepted);

    assert_eq!(submitted.borrow().len(), 1);
    assert_eq!(
        submitted.borrow()[0].get("username"),
        Some(&json!("Alice"))
    );

    let html = form.render().unwrap().to_html();
    assert!(!html.contains("Username must be at least 2 characters."));
    assert!(html.contains(r#"aria-invalid="false""#));
}

#[test]
fn as_child_merges_instead_of_wrapping() {
    let form = Form::new(username_schema())
        .unwrap()
        .default_values(defaults())
        .child(
            Field::new("username").child(
                FormControl::new()
                    .as_child()
                    .class("caller-class")
                    .child(Element::new("input").class("child-class")),
            ),
        );

    let html = form.render().unwrap().to_html();
    // The control's attributes land on the input itself, not on a wrapper.
    let input_tag = &html[html.find("<input").unwrap()..];
    let input_tag = &input_tag[..input_tag.find("/>").unwrap()];
    assert!(input_tag.contains("aria-describedby"));
    assert!(input_tag.contains(r#"class="child-class caller-class""#));
    assert_eq!(attr_value(&html, "aria-describedby").len(), 1);
}

#[test]
fn as_child_without_single_element_renders_nothing() {
    let form = Form::new(username_schema())
        .unwrap()
        .default_values(defaults())
        .child(Field::new("username").child(FormLabel::new().as_child().text("only text")));

    let html = form.render().unwrap().to_html();
    // The label contributes no output; the rest of the tree is unaffected.
    assert!(!html.contains("<label"));
    assert!(html.starts_with("<form"));
}

#[test]
fn every_bound_component_fails_outside_a_field() {
    let session = FormSession::new(&username_schema(), defaults()).unwrap();
    let scope = Scope::new(session);

    let failures = [
        FormLabel::new().render(&scope).unwrap_err().to_string(),
        FormControl::new().render(&scope).unwrap_err().to_string(),
        FormDescription::new().render(&scope).unwrap_err().to_string(),
        FormMessage::new().render(&scope).unwrap_err().to_string(),
    ];
    for (failure, component) in failures
        .iter()
        .zip(["FormLabel", "FormControl", "FormDescription", "FormMessage"])
    {
        assert_eq!(failure, &format!("{component} used outside of a Field"));
    }
}

#[test]
fn refs_compose_across_caller_and_merge() {
    let slot = NodeRef::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let cb = {
        let seen = Rc::clone(&seen);
        RefSink::callback(move |handle| seen.borrow_mut().push(handle.tag.clone()))
    };

    let form = Form::new(username_schema())
        .unwrap()
        .default_values(defaults())
        .child(
            Field::new("username").child(
                FormControl::new()
                    .as_child()
                    .node_ref(compose_refs([Some(cb), Some(slot.clone().into())]))
                    .child(Element::new("input")),
            ),
        );

    form.mount().unwrap();
    assert_eq!(seen.borrow().as_slice(), ["input"]);
    assert_eq!(slot.get().unwrap().tag, "input");
}

#[test]
fn derived_schema_type_drives_the_same_wiring() {
    use schemars::JsonSchema;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Profile {
        username: String,
    }

    let mut defaults = Map::new();
    defaults.insert("username".to_string(), json!("Alice"));

    let submitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submitted);
    let mut form = Form::new(SchemaSource::of::<Profile>())
        .unwrap()
        .default_values(defaults)
        .on_submit(move |values| sink.borrow_mut().push(values.clone()))
        .child(Field::new("username").child(FormControl::new()));

    assert_eq!(form.submit(), SubmitOutcome::Accepted);
    assert_eq!(submitted.borrow().len(), 1);
}
