//! The chart component: owns the surface, renders it and wires zoom input into it.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use biome_engine::coords::{Transform, Viewport};
use biome_engine::input::InputEvent;
use biome_engine::scene::{GroupId, Surface};
use biome_engine::svg::to_svg_document;

use crate::renderer::ChartRenderer;
use crate::zoom::{ZoomController, ZoomEvent};

/// Component inputs, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GraphProps {
    pub width: f32,
    pub height: f32,
}

impl Default for GraphProps {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl GraphProps {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Climate biome chart bound to its own drawing surface.
///
/// Lifecycle: [`mount`](Self::mount) draws and attaches zoom,
/// [`set_props`](Self::set_props) redraws on size changes,
/// [`unmount`](Self::unmount) tears everything down.
pub struct ClimateBiomeGraph {
    props: GraphProps,
    renderer: ChartRenderer,
    surface: Rc<RefCell<Surface>>,
    zoom: Option<ZoomController>,
    group: Option<GroupId>,
    /// Bumped on every visible change.
    revision: Rc<Cell<u64>>,
}

impl ClimateBiomeGraph {
    pub fn new(props: GraphProps) -> Self {
        Self {
            props,
            renderer: ChartRenderer::new(),
            surface: Rc::new(RefCell::new(Surface::new(props.viewport()))),
            zoom: None,
            group: None,
            revision: Rc::new(Cell::new(0)),
        }
    }

    pub fn props(&self) -> GraphProps {
        self.props
    }

    pub fn is_mounted(&self) -> bool {
        self.zoom.is_some()
    }

    /// Sizes the surface, renders the chart and attaches a fresh zoom controller.
    pub fn mount(&mut self) {
        let GraphProps { width, height } = self.props;

        let group = {
            let mut surface = self.surface.borrow_mut();
            surface.resize(self.props.viewport());
            self.renderer.render(&mut surface, width, height)
        };

        let mut zoom = ZoomController::new(self.surface.borrow().bounds());
        let surface = Rc::clone(&self.surface);
        let revision = Rc::clone(&self.revision);
        zoom.on_zoom(move |event: &ZoomEvent| {
            if surface.borrow_mut().set_transform(group, event.transform) {
                revision.set(revision.get().wrapping_add(1));
            }
        });

        self.zoom = Some(zoom);
        self.group = Some(group);
        self.bump();
        log::debug!("graph mounted at {width}x{height}");
    }

    /// Stores new props; a mounted graph redraws when the size changed.
    ///
    /// A redraw starts from the identity view.
    pub fn set_props(&mut self, props: GraphProps) {
        let resized = props != self.props;
        self.props = props;
        if resized && self.is_mounted() {
            self.mount();
        }
    }

    /// Clears the surface and detaches zoom handling.
    pub fn unmount(&mut self) {
        if let Some(mut zoom) = self.zoom.take() {
            zoom.clear_handler();
        }
        self.group = None;
        self.surface.borrow_mut().clear();
        self.bump();
        log::debug!("graph unmounted");
    }

    /// Routes platform input to the zoom controller. Returns `true` when the view changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.zoom.as_mut() {
            Some(zoom) => zoom.handle_event(event),
            None => false,
        }
    }

    /// Programmatic access to the zoom controller while mounted.
    pub fn zoom_mut(&mut self) -> Option<&mut ZoomController> {
        self.zoom.as_mut()
    }

    /// Current view transform; identity when unmounted.
    pub fn view_transform(&self) -> Transform {
        self.zoom.as_ref().map(ZoomController::transform).unwrap_or_default()
    }

    /// Transform carried by the drawn group: the margin offset until the first
    /// zoom event, the view transform after it.
    pub fn group_transform(&self) -> Option<Transform> {
        let surface = self.surface.borrow();
        self.group.and_then(|id| surface.group(id)).map(|g| g.transform)
    }

    pub fn surface(&self) -> Ref<'_, Surface> {
        self.surface.borrow()
    }

    /// Monotonic change counter for hosts that cache rendered output.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Standalone SVG document for the current surface.
    pub fn to_svg(&self) -> String {
        to_svg_document(&self.surface.borrow())
    }

    fn bump(&self) {
        self.revision.set(self.revision.get().wrapping_add(1));
    }
}

impl Default for ClimateBiomeGraph {
    fn default() -> Self {
        Self::new(GraphProps::default())
    }
}
