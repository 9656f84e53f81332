//! Panel dragging for the two page dividers
//!
//! Data flows: Mouse Events → DragController → grid track styles on `#container`
//!
//! Dragging the vertical bar is a horizontal drag and resizes the columns,
//! dragging the horizontal bar is a vertical drag and resizes the rows.
//! Sizes are measured from the page on every move, nothing is cached.

use crate::layout_host::{LayoutError, LayoutHost};
use shared::{GridAxis, LayoutConfig, PointerEvents, Region, RowMetrics, column_tracks, row_tracks};
use zoon::events::{MouseDown, MouseMove, MouseUp};
use zoon::*;

const DEBUG_DRAGGING: bool = false;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Vertical bar is held, columns follow the pointer
    Horizontal,
    /// Horizontal bar is held, rows follow the pointer
    Vertical,
}

impl DragState {
    pub fn is_horizontal(self) -> bool {
        self == DragState::Horizontal
    }

    pub fn is_vertical(self) -> bool {
        self == DragState::Vertical
    }

    /// Grid axis whose tracks follow the pointer in this state.
    pub fn resized_axis(self) -> Option<GridAxis> {
        match self {
            DragState::Idle => None,
            DragState::Horizontal => Some(GridAxis::Columns),
            DragState::Vertical => Some(GridAxis::Rows),
        }
    }
}

/// Pointer event as seen by the drag handlers.
pub trait DragEvent {
    fn suppress_default(&self);

    /// Viewport X coordinate
    fn pointer_x(&self) -> i32;

    /// Viewport Y coordinate
    fn pointer_y(&self) -> i32;
}

macro_rules! impl_drag_event {
    ($($event:ty),*) => {
        $(
            impl DragEvent for $event {
                fn suppress_default(&self) {
                    self.prevent_default();
                }

                fn pointer_x(&self) -> i32 {
                    self.x()
                }

                fn pointer_y(&self) -> i32 {
                    self.y()
                }
            }
        )*
    };
}

impl_drag_event!(MouseDown, MouseMove, MouseUp);

/// Owns the drag state of one page view. Clones share state, so a clone can be
/// moved into each event closure.
#[derive(Clone)]
pub struct DragController<H> {
    state: Mutable<DragState>,
    config: Mutable<LayoutConfig>,
    host: H,
}

impl<H: LayoutHost> DragController<H> {
    pub fn new(host: H, config: Mutable<LayoutConfig>) -> Self {
        Self {
            state: Mutable::new(DragState::Idle),
            config,
            host,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.state.get()
    }

    pub fn drag_state_signal(&self) -> impl Signal<Item = DragState> + use<H> {
        self.state.signal()
    }

    /// Used by the divider bars to highlight while they are held.
    pub fn is_axis_dragging_signal(&self, axis: GridAxis) -> impl Signal<Item = bool> + use<H> {
        self.state.signal_ref(move |state| state.resized_axis() == Some(axis))
    }

    // === EVENT ENTRY POINTS ===

    /// Mouse down on the vertical bar.
    pub fn start_horizontal_drag(&self, event: &impl DragEvent) -> Result<(), LayoutError> {
        self.start(event, DragState::Horizontal)
    }

    /// Mouse down on the horizontal bar.
    pub fn start_vertical_drag(&self, event: &impl DragEvent) -> Result<(), LayoutError> {
        self.start(event, DragState::Vertical)
    }

    /// Mouse up anywhere. Restores the panes even when no drag was active.
    pub fn end_drag(&self, event: &impl DragEvent) -> Result<(), LayoutError> {
        event.suppress_default();
        if DEBUG_DRAGGING {
            zoon::println!("drag ended: {:?}", self.state.get());
        }
        self.state.set_neq(DragState::Idle);
        self.set_content_pointer_events(PointerEvents::Auto)
    }

    /// Mouse move anywhere. Does nothing unless a drag is active.
    pub fn on_drag(&self, event: &impl DragEvent) -> Result<(), LayoutError> {
        let state = self.state.get();
        if state == DragState::Idle {
            return Ok(());
        }
        event.suppress_default();
        let (left, top) = self.host.client_origin(Region::Container)?;
        match state {
            DragState::Horizontal => self.apply_column_tracks(event.pointer_x() - left),
            DragState::Vertical => self.apply_row_tracks(event.pointer_y() - top),
            DragState::Idle => Ok(()),
        }
    }

    // === TRACK UPDATES ===
    // Pointer positions here are relative to the container.

    pub fn apply_column_tracks(&self, pointer_x: i32) -> Result<(), LayoutError> {
        let container_width = self.host.offset_width(Region::Container)?;
        let tracks = column_tracks(pointer_x, container_width, &self.config.lock_ref());
        self.host.set_style(
            Region::Container,
            GridAxis::Columns.css_property(),
            &tracks.to_string(),
        )
    }

    pub fn apply_row_tracks(&self, pointer_y: i32) -> Result<(), LayoutError> {
        let metrics = RowMetrics {
            pointer_y,
            container_height: self.host.offset_height(Region::Container)?,
            header_height: self.host.offset_height(Region::Header)?,
            footer_height: self.host.offset_height(Region::Footer)?,
        };
        let tracks = row_tracks(metrics, &self.config.lock_ref());
        self.host.set_style(
            Region::Container,
            GridAxis::Rows.css_property(),
            &tracks.to_string(),
        )
    }

    fn start(&self, event: &impl DragEvent, state: DragState) -> Result<(), LayoutError> {
        event.suppress_default();
        if DEBUG_DRAGGING {
            zoon::println!("drag started: {:?}", state);
        }
        self.state.set_neq(state);
        self.set_content_pointer_events(PointerEvents::None)
    }

    fn set_content_pointer_events(&self, mode: PointerEvents) -> Result<(), LayoutError> {
        for pane in Region::CONTENT_PANES {
            self.host.set_style(pane, PointerEvents::CSS_PROPERTY, mode.as_css())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct PageState {
        sizes: HashMap<Region, (i32, i32)>,
        container_origin: (i32, i32),
        styles: HashMap<(Region, &'static str), String>,
        style_writes: usize,
    }

    #[derive(Clone, Default)]
    struct FakePage(Rc<RefCell<PageState>>);

    impl FakePage {
        fn standard() -> Self {
            let page = FakePage::default();
            {
                let mut state = page.0.borrow_mut();
                for region in Region::ALL {
                    state.sizes.insert(region, (0, 0));
                }
                state.sizes.insert(Region::Container, (1000, 800));
                state.sizes.insert(Region::Header, (1000, 50));
                state.sizes.insert(Region::Footer, (1000, 40));
            }
            page
        }

        fn offset_by(self, left: i32, top: i32) -> Self {
            self.0.borrow_mut().container_origin = (left, top);
            self
        }

        fn without(self, region: Region) -> Self {
            self.0.borrow_mut().sizes.remove(&region);
            self
        }

        fn style(&self, region: Region, property: &str) -> Option<String> {
            self.0
                .borrow()
                .styles
                .iter()
                .find(|((styled, name), _)| *styled == region && *name == property)
                .map(|(_, value)| value.clone())
        }

        fn style_writes(&self) -> usize {
            self.0.borrow().style_writes
        }

        fn size(&self, region: Region) -> Result<(i32, i32), LayoutError> {
            self.0
                .borrow()
                .sizes
                .get(&region)
                .copied()
                .ok_or(LayoutError::MissingElement(region))
        }
    }

    impl LayoutHost for FakePage {
        fn offset_width(&self, region: Region) -> Result<i32, LayoutError> {
            Ok(self.size(region)?.0)
        }

        fn offset_height(&self, region: Region) -> Result<i32, LayoutError> {
            Ok(self.size(region)?.1)
        }

        fn set_style(&self, region: Region, property: &'static str, value: &str) -> Result<(), LayoutError> {
            self.size(region)?;
            let mut state = self.0.borrow_mut();
            state.styles.insert((region, property), value.to_string());
            state.style_writes += 1;
            Ok(())
        }

        fn client_origin(&self, region: Region) -> Result<(i32, i32), LayoutError> {
            self.size(region)?;
            if region == Region::Container {
                Ok(self.0.borrow().container_origin)
            } else {
                Ok((0, 0))
            }
        }
    }

    struct FakeEvent {
        x: i32,
        y: i32,
        suppressed: Cell<bool>,
    }

    impl FakeEvent {
        fn at(x: i32, y: i32) -> Self {
            Self {
                x,
                y,
                suppressed: Cell::new(false),
            }
        }
    }

    impl DragEvent for FakeEvent {
        fn suppress_default(&self) {
            self.suppressed.set(true);
        }

        fn pointer_x(&self) -> i32 {
            self.x
        }

        fn pointer_y(&self) -> i32 {
            self.y
        }
    }

    fn controller(page: &FakePage) -> DragController<FakePage> {
        DragController::new(page.clone(), Mutable::new(LayoutConfig::default()))
    }

    #[test]
    fn moving_without_a_drag_touches_nothing() {
        let page = FakePage::standard();
        let controller = controller(&page);
        let event = FakeEvent::at(300, 400);

        controller.on_drag(&event).unwrap();

        assert_eq!(page.style_writes(), 0);
        assert!(!event.suppressed.get());
    }

    #[test]
    fn horizontal_drag_start_freezes_content_panes() {
        let page = FakePage::standard();
        let controller = controller(&page);
        let event = FakeEvent::at(0, 0);

        controller.start_horizontal_drag(&event).unwrap();

        assert!(event.suppressed.get());
        assert!(controller.drag_state().is_horizontal());
        assert!(!controller.drag_state().is_vertical());
        assert_eq!(page.style(Region::Overview, "pointer-events").as_deref(), Some("none"));
        assert_eq!(page.style(Region::Details, "pointer-events").as_deref(), Some("none"));
    }

    #[test]
    fn vertical_drag_start_freezes_content_panes() {
        let page = FakePage::standard();
        let controller = controller(&page);

        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        assert!(controller.drag_state().is_vertical());
        assert_eq!(page.style(Region::Overview, "pointer-events").as_deref(), Some("none"));
        assert_eq!(page.style(Region::Details, "pointer-events").as_deref(), Some("none"));
    }

    #[test]
    fn end_drag_clears_state_and_restores_panes() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();

        let release = FakeEvent::at(0, 0);
        controller.end_drag(&release).unwrap();

        assert!(release.suppressed.get());
        assert_eq!(controller.drag_state(), DragState::Idle);
        assert_eq!(page.style(Region::Overview, "pointer-events").as_deref(), Some("auto"));
        assert_eq!(page.style(Region::Details, "pointer-events").as_deref(), Some("auto"));
    }

    #[test]
    fn end_drag_while_idle_still_restores_panes() {
        let page = FakePage::standard();
        let controller = controller(&page);

        let release = FakeEvent::at(10, 10);
        controller.end_drag(&release).unwrap();

        assert!(release.suppressed.get());
        assert_eq!(controller.drag_state(), DragState::Idle);
        assert_eq!(page.style(Region::Overview, "pointer-events").as_deref(), Some("auto"));
        assert_eq!(page.style(Region::Details, "pointer-events").as_deref(), Some("auto"));
    }

    #[test]
    fn horizontal_drag_resizes_columns() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();

        let mv = FakeEvent::at(300, 123);
        controller.on_drag(&mv).unwrap();

        assert!(mv.suppressed.get());
        assert_eq!(
            page.style(Region::Container, "grid-template-columns").as_deref(),
            Some("300px 2px 698px")
        );
        assert_eq!(page.style(Region::Container, "grid-template-rows"), None);
    }

    #[test]
    fn vertical_drag_resizes_rows() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        controller.on_drag(&FakeEvent::at(77, 400)).unwrap();

        assert_eq!(
            page.style(Region::Container, "grid-template-rows").as_deref(),
            Some("60px 340px 2px 348px 50px")
        );
        assert_eq!(page.style(Region::Container, "grid-template-columns"), None);
    }

    #[test]
    fn pointer_is_measured_from_the_container_origin() {
        let page = FakePage::standard().offset_by(20, 30);
        let controller = controller(&page);

        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();
        controller.on_drag(&FakeEvent::at(320, 0)).unwrap();
        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();
        controller.on_drag(&FakeEvent::at(0, 430)).unwrap();

        assert_eq!(
            page.style(Region::Container, "grid-template-columns").as_deref(),
            Some("300px 2px 698px")
        );
        assert_eq!(
            page.style(Region::Container, "grid-template-rows").as_deref(),
            Some("60px 340px 2px 348px 50px")
        );
    }

    #[test]
    fn starting_one_axis_replaces_the_other() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();
        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        controller.on_drag(&FakeEvent::at(300, 400)).unwrap();

        assert_eq!(controller.drag_state(), DragState::Vertical);
        assert!(page.style(Region::Container, "grid-template-rows").is_some());
        assert_eq!(page.style(Region::Container, "grid-template-columns"), None);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();
        controller.end_drag(&FakeEvent::at(0, 0)).unwrap();
        let writes = page.style_writes();

        controller.on_drag(&FakeEvent::at(500, 500)).unwrap();

        assert_eq!(page.style_writes(), writes);
    }

    #[test]
    fn pointer_outside_container_is_applied_unclamped() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();

        controller.on_drag(&FakeEvent::at(1200, 0)).unwrap();

        assert_eq!(
            page.style(Region::Container, "grid-template-columns").as_deref(),
            Some("1200px 2px -202px")
        );
    }

    #[test]
    fn sizes_are_measured_on_every_move() {
        let page = FakePage::standard();
        let controller = controller(&page);
        controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap();
        controller.on_drag(&FakeEvent::at(300, 0)).unwrap();

        page.0.borrow_mut().sizes.insert(Region::Container, (600, 800));
        controller.on_drag(&FakeEvent::at(300, 0)).unwrap();

        assert_eq!(
            page.style(Region::Container, "grid-template-columns").as_deref(),
            Some("300px 2px 298px")
        );
    }

    #[test]
    fn loaded_config_applies_to_the_next_move() {
        let page = FakePage::standard();
        let config = Mutable::new(LayoutConfig::default());
        let controller = DragController::new(page.clone(), config.clone());
        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        config.set(LayoutConfig {
            divider_width: 4,
            header_margin: 0,
            footer_margin: 0,
            ..LayoutConfig::default()
        });
        controller.on_drag(&FakeEvent::at(0, 400)).unwrap();

        assert_eq!(
            page.style(Region::Container, "grid-template-rows").as_deref(),
            Some("50px 350px 4px 356px 40px")
        );
    }

    #[test]
    fn missing_region_is_reported() {
        let page = FakePage::standard().without(Region::Footer);
        let controller = controller(&page);
        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        let error = controller.on_drag(&FakeEvent::at(0, 400)).unwrap_err();

        assert_eq!(error, LayoutError::MissingElement(Region::Footer));
        assert_eq!(error.to_string(), "element '#footer' not found");
    }

    #[test]
    fn start_fails_when_a_content_pane_is_missing() {
        let page = FakePage::standard().without(Region::Details);
        let controller = controller(&page);

        let error = controller.start_horizontal_drag(&FakeEvent::at(0, 0)).unwrap_err();

        assert_eq!(error, LayoutError::MissingElement(Region::Details));
    }

    #[tokio::test]
    async fn divider_highlight_follows_the_active_axis() {
        let page = FakePage::standard();
        let controller = controller(&page);

        controller.start_vertical_drag(&FakeEvent::at(0, 0)).unwrap();

        let vertical = controller
            .is_axis_dragging_signal(GridAxis::Rows)
            .to_stream()
            .next()
            .await
            .unwrap();
        let horizontal = controller
            .is_axis_dragging_signal(GridAxis::Columns)
            .to_stream()
            .next()
            .await
            .unwrap();
        let state = controller.drag_state_signal().to_stream().next().await.unwrap();

        assert!(vertical);
        assert!(!horizontal);
        assert_eq!(state, DragState::Vertical);
    }

    #[tokio::test]
    async fn idle_highlights_no_divider() {
        let page = FakePage::standard();
        let controller = controller(&page);

        for axis in [GridAxis::Columns, GridAxis::Rows] {
            let highlighted = controller
                .is_axis_dragging_signal(axis)
                .to_stream()
                .next()
                .await
                .unwrap();
            assert!(!highlighted);
        }
        assert_eq!(DragState::Idle.resized_axis(), None);
    }
}
