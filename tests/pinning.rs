//! Integration tests for the pinning operations: how many constraints each
//! request creates and which constants they carry.

use edgepin::{
    BoundingBox, Edge, EdgeGroup, Insets, LayoutEngine, PinAnchors, PinError, PinOptions,
    Priority, Relation, ViewId,
};
use pretty_assertions::assert_eq;

/// A 320x480 root with one subview
fn container_and_child() -> (LayoutEngine, ViewId, ViewId) {
    let mut engine = LayoutEngine::new();
    let root = engine.create_view("root", BoundingBox::new(0.0, 0.0, 320.0, 480.0));
    let child = engine.create_view("child", BoundingBox::zero());
    engine.add_subview(root, child).expect("child should attach");
    (engine, root, child)
}

fn same_axis_pairs() -> Vec<(Edge, Edge)> {
    let mut pairs = Vec::new();
    for a in Edge::ALL {
        for b in Edge::ALL {
            if a.shares_axis_with(b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

#[test]
fn test_same_axis_pin_creates_one_signed_constraint() {
    for (edge, target_edge) in same_axis_pairs() {
        let (mut engine, root, child) = container_and_child();
        let constraint = engine
            .pin(child)
            .edge_to_edge(edge, root, target_edge, PinOptions::new().with_inset(12.0))
            .unwrap_or_else(|e| panic!("{} -> {} should pin: {}", edge, target_edge, e));

        assert_eq!(engine.active_constraints().count(), 1);
        assert!(engine.is_active(constraint.id));
        assert_eq!(constraint.constant(), 12.0 * edge.multiplier());
        assert_eq!(constraint.relation(), Relation::Equal);
        assert_eq!(constraint.priority(), Priority::REQUIRED);
    }
}

#[test]
fn test_cross_axis_pin_fails_without_constraints() {
    for edge in Edge::ALL {
        for target_edge in Edge::ALL {
            if edge.shares_axis_with(target_edge) {
                continue;
            }
            let (mut engine, root, child) = container_and_child();
            let result =
                engine
                    .pin(child)
                    .edge_to_edge(edge, root, target_edge, PinOptions::default());

            match result {
                Err(PinError::AxisMismatch {
                    edge: e,
                    target_edge: t,
                }) => {
                    assert_eq!((e, t), (edge, target_edge));
                }
                other => panic!("expected AxisMismatch, got {:?}", other),
            }
            assert_eq!(engine.active_constraints().count(), 0);
        }
    }
}

#[test]
fn test_all_edges_with_per_edge_insets() {
    let (mut engine, root, child) = container_and_child();
    let options = PinOptions::new().with_insets(Insets::new(10.0, 5.0, 10.0, 5.0));
    let constraints = engine
        .pin(child)
        .edges_to_same_edges(EdgeGroup::All, root, options)
        .unwrap();

    let summary: Vec<(Edge, f64)> = constraints
        .iter()
        .zip(Edge::ALL)
        .map(|(c, edge)| {
            assert_eq!(c.first(), child.anchor(edge));
            assert_eq!(c.second(), Some(root.anchor(edge)));
            (edge, c.constant())
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (Edge::Top, 10.0),
            (Edge::Left, 5.0),
            (Edge::Bottom, -10.0),
            (Edge::Right, -5.0),
        ]
    );
    assert_eq!(engine.active_constraints().count(), 4);
}

#[test]
fn test_excluding_bottom_creates_three_constraints() {
    let (mut engine, root, child) = container_and_child();
    let constraints = engine
        .pin(child)
        .edges_to_same_edges_excluding(Edge::Bottom, root, PinOptions::new().with_inset(8.0))
        .unwrap();

    let summary: Vec<_> = constraints
        .iter()
        .map(|c| (c.first().attribute, c.constant()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Edge::Top.attribute(), 8.0),
            (Edge::Left.attribute(), 8.0),
            (Edge::Right.attribute(), -8.0),
        ]
    );
}

#[test]
fn test_edge_list_order_does_not_matter() {
    let (mut engine, root, child) = container_and_child();
    let constraints = engine
        .pin(child)
        .edges_to_same_edges([Edge::Right, Edge::Top, Edge::Right], root, PinOptions::default())
        .unwrap();
    let edges: Vec<_> = constraints.iter().map(|c| c.first().attribute).collect();
    assert_eq!(edges, vec![Edge::Top.attribute(), Edge::Right.attribute()]);
}

#[test]
fn test_superview_variants_without_superview_are_noops() {
    let mut engine = LayoutEngine::new();
    let lonely = engine.create_view("lonely", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    let options = PinOptions::new().with_inset(4.0);

    let mut pin = engine.pin(lonely);
    assert_eq!(pin.edge_to_superview(Edge::Top, options).unwrap(), None);
    assert_eq!(
        pin.edge_to_superview_edge(Edge::Left, Edge::Right, options)
            .unwrap(),
        None
    );
    assert!(pin.edges_to_superview(EdgeGroup::All, options).unwrap().is_empty());
    assert!(pin
        .edges_to_superview_excluding(Edge::Top, options)
        .unwrap()
        .is_empty());

    assert_eq!(engine.active_constraints().count(), 0);
    // Nothing was pinned, so the frame is still authoritative
    assert!(engine.translates_frame(lonely).unwrap());
}

#[test]
fn test_superview_variants_target_current_superview() {
    let (mut engine, root, child) = container_and_child();
    let constraint = engine
        .pin(child)
        .edge_to_superview(Edge::Left, PinOptions::default())
        .unwrap()
        .expect("child has a superview");
    assert_eq!(constraint.second(), Some(root.anchor(Edge::Left)));

    let below = engine
        .pin(child)
        .edge_to_superview_edge(Edge::Top, Edge::Bottom, PinOptions::new().with_inset(3.0))
        .unwrap()
        .expect("child has a superview");
    assert_eq!(below.second(), Some(root.anchor(Edge::Bottom)));
    assert_eq!(below.constant(), 3.0);
}

#[test]
fn test_superview_lookup_happens_at_call_time() {
    let (mut engine, root, child) = container_and_child();
    engine.remove_from_superview(child).unwrap();
    assert!(engine
        .pin(child)
        .edges_to_superview(EdgeGroup::All, PinOptions::default())
        .unwrap()
        .is_empty());

    let other = engine.create_view("other", BoundingBox::zero());
    engine.add_subview(root, other).unwrap();
    engine.add_subview(other, child).unwrap();
    let constraints = engine
        .pin(child)
        .edges_to_superview(EdgeGroup::Horizontal, PinOptions::default())
        .unwrap();
    assert_eq!(constraints.len(), 2);
    assert!(constraints
        .iter()
        .all(|c| c.second().map(|a| a.view) == Some(other)));
}

#[test]
fn test_to_anchors_with_no_anchors_is_noop() {
    let (mut engine, _root, child) = container_and_child();
    let constraints = engine
        .pin(child)
        .to_anchors(PinAnchors::new(), PinOptions::new().with_inset(5.0))
        .unwrap();
    assert!(constraints.is_empty());
    assert_eq!(engine.active_constraints().count(), 0);
    assert!(engine.translates_frame(child).unwrap());
}

#[test]
fn test_to_anchors_top_and_left_only() {
    let (mut engine, root, child) = container_and_child();
    let anchors = PinAnchors::new()
        .top(root.top_anchor())
        .left(root.left_anchor());
    let options = PinOptions::new().with_insets(Insets::new(7.0, 9.0, 100.0, 100.0));
    let constraints = engine.pin(child).to_anchors(anchors, options).unwrap();

    let summary: Vec<_> = constraints
        .iter()
        .map(|c| (c.first(), c.second(), c.constant()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (child.anchor(Edge::Top), Some(root.anchor(Edge::Top)), 7.0),
            (child.anchor(Edge::Left), Some(root.anchor(Edge::Left)), 9.0),
        ]
    );
    assert!(!engine.translates_frame(child).unwrap());
}

#[test]
fn test_to_anchors_accepts_sibling_and_center_anchors() {
    let (mut engine, root, child) = container_and_child();
    let header = engine.create_view("header", BoundingBox::new(0.0, 0.0, 320.0, 44.0));
    engine.add_subview(root, header).unwrap();

    let anchors = PinAnchors::new()
        .top(header.bottom_anchor())
        .right(root.center_x_anchor());
    let constraints = engine
        .pin(child)
        .to_anchors(anchors, PinOptions::new().with_inset(4.0))
        .unwrap();

    assert_eq!(constraints.len(), 2);
    assert_eq!(constraints[0].second(), Some(header.bottom_anchor().anchor()));
    assert_eq!(constraints[0].constant(), 4.0);
    assert_eq!(constraints[1].second(), Some(root.center_x_anchor().anchor()));
    assert_eq!(constraints[1].constant(), -4.0);
}

#[test]
fn test_reissuing_a_request_is_not_deduplicated() {
    let (mut engine, root, child) = container_and_child();
    let options = PinOptions::new().with_inset(6.0);
    let first = engine
        .pin(child)
        .edge_to_same_edge(Edge::Top, root, options)
        .unwrap();
    let second = engine
        .pin(child)
        .edge_to_same_edge(Edge::Top, root, options)
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.spec, second.spec);
    assert_eq!(engine.active_constraints().count(), 2);

    // Each one can be removed on its own
    engine.deactivate(first.id).unwrap();
    assert!(engine.is_active(second.id));
}

#[test]
fn test_options_carry_relation_and_priority() {
    let (mut engine, root, child) = container_and_child();
    let options = PinOptions::new()
        .with_inset(2.0)
        .with_relation(Relation::LessOrEqual)
        .with_priority(Priority::HIGH);
    let constraints = engine
        .pin(child)
        .edges_to_superview(EdgeGroup::Vertical, options)
        .unwrap();

    assert_eq!(constraints.len(), 2);
    for c in &constraints {
        assert_eq!(c.relation(), Relation::LessOrEqual);
        assert_eq!(c.priority(), Priority::HIGH);
    }
    assert_eq!(engine.constraints_for(root).len(), 2);
}

#[test]
fn test_described_constraints() {
    let (mut engine, _root, child) = container_and_child();
    let options = PinOptions::new().with_insets(Insets::new(10.0, 5.0, 10.0, 5.0));
    let constraints = engine
        .pin(child)
        .edges_to_superview(EdgeGroup::All, options)
        .unwrap();

    let described: Vec<String> = constraints.iter().map(|c| engine.describe(c)).collect();
    insta::assert_snapshot!(described.join("\n"), @r"
    child.top == root.top + 10 @1000
    child.left == root.left + 5 @1000
    child.bottom == root.bottom - 10 @1000
    child.right == root.right - 5 @1000
    ");
}
