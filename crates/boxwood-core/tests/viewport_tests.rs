//! Viewport binding lifecycle and resize-driven relayout.

#![allow(clippy::float_cmp)]

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use boxwood_common::geometry::{Dimension, Rect, Shape};
use boxwood_core::document::{Analyzer, BoxDocument};
use boxwood_core::error::ViewError;
use boxwood_core::host::{HostContainer, ScrollViewport};
use boxwood_core::surface::{ClippedSurface, ListSurface, Surface, SurfaceCommand};
use boxwood_core::view::viewport::ViewportRoot;
use boxwood_core::view::{Axis, View};

use common::{
    PlainSurface, StubAnalyzer, StubBox, StubContainer, StubDocument, StubViewport, core_of,
};

struct Fixture {
    layout: Rc<StubBox>,
    analyzer: Rc<RefCell<StubAnalyzer>>,
    document: Rc<RefCell<StubDocument>>,
}

impl Fixture {
    fn new(bounds: Rect, min_width: f32, max_width: f32) -> Self {
        Self {
            layout: Rc::new(StubBox::new(bounds).with_widths(min_width, max_width)),
            analyzer: Rc::new(RefCell::new(StubAnalyzer::default())),
            document: Rc::new(RefCell::new(StubDocument::default())),
        }
    }

    fn root(&self) -> ViewportRoot {
        ViewportRoot::new(
            core_of(&self.layout, 0, 10),
            Rc::clone(&self.analyzer) as Rc<RefCell<dyn Analyzer>>,
            Rc::clone(&self.document) as Rc<RefCell<dyn BoxDocument>>,
        )
    }
}

fn default_fixture() -> Fixture {
    Fixture::new(Rect::new(0.0, 0.0, 400.0, 300.0), 100.0, 800.0)
}

#[test]
fn resize_into_new_extent_relays_out_once() {
    let fixture = default_fixture();
    let container = StubContainer::new();
    let mut root = fixture.root();
    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));

    let extent = Dimension::new(300.0, 200.0);
    assert!(root.check_size(extent));
    {
        let analyzer = fixture.analyzer.borrow();
        assert_eq!(analyzer.calls, 1);
        assert_eq!(analyzer.last_dimension, Some(extent));
    }
    assert_eq!(fixture.document.borrow().replaced, 1);
    assert_eq!(container.preference_notices.get(), 1);

    // The same extent again is a no-op.
    assert!(!root.check_size(extent));
    assert_eq!(fixture.analyzer.borrow().calls, 1);
    assert_eq!(container.preference_notices.get(), 1);
}

#[test]
fn zero_extent_never_relays_out() {
    let fixture = default_fixture();
    let mut root = fixture.root();

    assert!(!root.check_size(Dimension::new(0.0, 200.0)));
    assert!(!root.check_size(Dimension::new(300.0, 0.0)));
    assert_eq!(fixture.analyzer.borrow().calls, 0);
}

#[test]
fn widths_outside_the_admissible_window_are_ignored() {
    let fixture = default_fixture();
    let mut root = fixture.root();

    // At or beyond either boundary the current layout already fits.
    assert!(!root.check_size(Dimension::new(100.0, 200.0)));
    assert!(!root.check_size(Dimension::new(99.0, 200.0)));
    assert!(!root.check_size(Dimension::new(800.0, 200.0)));
    assert!(!root.check_size(Dimension::new(801.0, 200.0)));
    assert_eq!(fixture.analyzer.borrow().calls, 0);

    // Strictly inside the window the relayout runs.
    assert!(root.check_size(Dimension::new(101.0, 200.0)));
    assert_eq!(fixture.analyzer.borrow().calls, 1);
}

#[test]
fn failed_relayout_keeps_the_previous_layout() {
    let fixture = default_fixture();
    fixture.analyzer.borrow_mut().fail = true;
    let container = StubContainer::new();
    let mut root = fixture.root();
    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));

    let extent = Dimension::new(300.0, 200.0);
    assert!(!root.check_size(extent));
    assert_eq!(fixture.analyzer.borrow().calls, 1);
    assert_eq!(fixture.document.borrow().replaced, 0);
    assert_eq!(container.preference_notices.get(), 0);

    // The extent was still recorded, so the same size is not retried.
    assert!(!root.check_size(extent));
    assert_eq!(fixture.analyzer.borrow().calls, 1);
}

#[test]
fn relayout_error_carries_the_engine_failure() {
    let fixture = default_fixture();
    fixture.analyzer.borrow_mut().fail = true;
    let mut root = fixture.root();

    let err = root
        .relayout(Dimension::new(300.0, 200.0))
        .expect_err("engine failure propagates");
    assert!(matches!(err, ViewError::Relayout(_)));
}

#[test]
fn attach_registers_exactly_one_listener() {
    let fixture = default_fixture();
    let viewport = StubViewport::new(Dimension::new(300.0, 200.0));
    let container =
        StubContainer::with_viewport(Rc::clone(&viewport) as Rc<dyn ScrollViewport>);
    let mut root = fixture.root();

    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));
    assert!(root.is_bound());
    assert_eq!(viewport.added.get(), 1);

    // Re-attaching to the same container keeps the existing registration.
    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));
    assert_eq!(viewport.added.get(), 1);
    assert_eq!(viewport.active_listeners(), 1);
}

#[test]
fn detach_releases_the_listener() {
    let fixture = default_fixture();
    let viewport = StubViewport::new(Dimension::new(300.0, 200.0));
    let container =
        StubContainer::with_viewport(Rc::clone(&viewport) as Rc<dyn ScrollViewport>);
    let mut root = fixture.root();

    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));
    root.attach(None);
    assert!(!root.is_bound());
    assert_eq!(viewport.removed.get(), 1);

    // A second detach has nothing left to release.
    root.attach(None);
    assert_eq!(viewport.removed.get(), 1);
}

#[test]
fn rebinding_moves_the_listener_to_the_new_viewport() {
    let fixture = default_fixture();
    let first = StubViewport::new(Dimension::new(300.0, 200.0));
    let second = StubViewport::new(Dimension::new(500.0, 400.0));
    let mut root = fixture.root();

    root.attach(Some(
        StubContainer::with_viewport(Rc::clone(&first) as Rc<dyn ScrollViewport>)
            as Rc<dyn HostContainer>,
    ));
    root.attach(Some(
        StubContainer::with_viewport(Rc::clone(&second) as Rc<dyn ScrollViewport>)
            as Rc<dyn HostContainer>,
    ));

    assert_eq!(first.removed.get(), 1);
    assert_eq!(second.added.get(), 1);
    assert!(root.is_bound());
}

#[test]
fn container_without_viewport_unbinds() {
    let fixture = default_fixture();
    let viewport = StubViewport::new(Dimension::new(300.0, 200.0));
    let mut root = fixture.root();

    root.attach(Some(
        StubContainer::with_viewport(Rc::clone(&viewport) as Rc<dyn ScrollViewport>)
            as Rc<dyn HostContainer>,
    ));
    assert!(root.is_bound());

    root.attach(Some(StubContainer::new() as Rc<dyn HostContainer>));
    assert!(!root.is_bound());
    assert_eq!(viewport.removed.get(), 1);
}

#[test]
fn reclaimed_viewport_lapses_and_rebinds() {
    let fixture = default_fixture();
    let container = StubContainer::new();
    let mut root = fixture.root();

    {
        let viewport = StubViewport::new(Dimension::new(300.0, 200.0));
        *container.viewport.borrow_mut() =
            Some(Rc::clone(&viewport) as Rc<dyn ScrollViewport>);
        root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));
        assert!(root.is_bound());
        *container.viewport.borrow_mut() = None;
    }
    // The only strong reference is gone; the binding lapses to empty.
    assert!(!root.is_bound());

    let replacement = StubViewport::new(Dimension::new(300.0, 200.0));
    *container.viewport.borrow_mut() =
        Some(Rc::clone(&replacement) as Rc<dyn ScrollViewport>);
    root.attach(Some(Rc::clone(&container) as Rc<dyn HostContainer>));

    assert!(root.is_bound());
    assert_eq!(replacement.added.get(), 1);
}

#[test]
fn painting_needs_a_clip_capable_surface() {
    let fixture = default_fixture();
    let root = fixture.root();

    let mut surface = PlainSurface;
    let err = root
        .paint(&mut surface, Shape::Rect(Rect::new(0.0, 0.0, 100.0, 100.0)))
        .expect_err("clipping is required at the root");
    assert!(matches!(err, ViewError::UnsupportedSurface));
}

#[test]
fn paint_combines_allocation_bounds_and_prior_clip() {
    let fixture = Fixture::new(Rect::new(0.0, 0.0, 500.0, 500.0), 100.0, 800.0);
    let root = fixture.root();

    let mut surface = ListSurface::new();
    let prior = Rect::new(20.0, 20.0, 200.0, 200.0);
    surface
        .as_clipped()
        .expect("list surface supports clipping")
        .set_clip(Some(prior));

    root.paint(&mut surface, Shape::Rect(Rect::new(0.0, 0.0, 50.0, 50.0)))
        .expect("paint succeeds");

    let clips: Vec<Option<Rect>> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            SurfaceCommand::SetClip(clip) => Some(*clip),
            _ => None,
        })
        .collect();
    assert_eq!(
        clips,
        vec![
            Some(prior),
            Some(Rect::new(20.0, 20.0, 30.0, 30.0)),
            Some(prior),
        ],
        "clip must narrow for the subtree and be restored afterward"
    );
    assert_eq!(surface.clip(), Some(prior));
}

#[test]
fn root_stays_active_when_its_box_is_hidden() {
    let fixture = default_fixture();
    fixture.layout.displayed.set(false);
    let root = fixture.root();

    assert!(root.is_visible());
    assert_eq!(root.preferred_span(Axis::Horizontal), 400.0);
    assert_eq!(root.preferred_span(Axis::Vertical), 300.0);
    assert_eq!(root.minimum_span(Axis::Horizontal), 100.0);
    assert_eq!(root.maximum_span(Axis::Horizontal), 800.0);
}

#[test]
fn resize_event_entry_point_runs_the_same_gate() {
    let fixture = default_fixture();
    let mut root = fixture.root();

    root.viewport_resized(Dimension::new(300.0, 200.0));
    assert_eq!(fixture.analyzer.borrow().calls, 1);

    root.viewport_resized(Dimension::new(300.0, 200.0));
    assert_eq!(fixture.analyzer.borrow().calls, 1);
}
