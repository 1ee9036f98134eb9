use progress_rs::api::{HostElement, ProgressWidget};

#[test]
fn min_attribute_set_before_creation_reaches_input_node() {
    let host = HostElement::new("progress-bar").with_attribute("min", "2");
    let widget = ProgressWidget::on_create(&host).expect("create");
    assert_eq!(widget.tree().input().attribute("min"), Some("2"));
    assert_eq!(widget.min(), 2.0);
}

#[test]
fn unrecognized_attribute_is_never_mirrored_and_never_fails() {
    let host = HostElement::new("progress-bar")
        .with_attribute("class", "fancy")
        .with_attribute("max", "8");
    let widget = ProgressWidget::on_create(&host).expect("create");

    assert_eq!(widget.tree().input().attribute("class"), None);
    assert_eq!(widget.tree().progress().attribute("class"), None);
    assert_eq!(widget.max(), 8.0);
}

#[test]
fn style_attributes_reach_their_visual_nodes() {
    let host = HostElement::new("progress-bar")
        .with_attribute("bar-color", "tomato")
        .with_attribute("track-color", "gainsboro")
        .with_attribute("corner-radius", "6px");
    let widget = ProgressWidget::on_create(&host).expect("create");

    let tree = widget.tree();
    assert_eq!(tree.progress().attribute("fill"), Some("tomato"));
    assert_eq!(
        tree.background().expect("background node").attribute("fill"),
        Some("gainsboro")
    );
    assert_eq!(tree.progress().attribute("corner-radius"), Some("6px"));
    assert_eq!(
        tree.background()
            .expect("background node")
            .attribute("corner-radius"),
        Some("6px")
    );
}

#[test]
fn bounds_are_established_before_the_first_value_computation() {
    // With min=10/max=20 mirrored first, an input of 15 renders at 50%;
    // had the default 0..100 bounds been used the bar would read 15%.
    let host = HostElement::new("progress-bar")
        .with_attribute("min", "10")
        .with_attribute("max", "20");
    let mut widget = ProgressWidget::on_create(&host).expect("create");

    widget.dispatch_input(15.0);
    assert_eq!(widget.tree().progress().attribute("width"), Some("50%"));
}
