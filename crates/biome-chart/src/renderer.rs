//! Clear-and-redraw chart renderer.

use biome_engine::coords::{Rect, Vec2, Viewport};
use biome_engine::paint::Color;
use biome_engine::scene::{DrawList, GroupId, Surface, TextAnchor, TextCmd, ZIndex};

use crate::axis::{Axis, FONT_SIZE};
use crate::data::{Biome, City, BIOMES, CITIES};
use crate::layout::{ChartLayout, Margins};

pub const BIOME_OPACITY: f32 = 0.5;
pub const CITY_RADIUS: f32 = 5.0;
pub const CITY_CLASS: &str = "city";

pub const X_LABEL: &str = "Annual Rainfall (mm)";
pub const Y_LABEL: &str = "Average Temperature (°C)";

const X_TICKS: usize = 5;
const Y_TICKS: usize = 10;
const X_LABEL_OFFSET: f32 = 25.0;
const Y_LABEL_OFFSET: f32 = 30.0;

const Z_BIOMES: ZIndex = ZIndex(0);
const Z_CITIES: ZIndex = ZIndex(1);
const Z_AXES: ZIndex = ZIndex(2);

/// Draws biomes, cities and both axes into one group on a surface.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    margins: Margins,
    biomes: &'static [Biome],
    cities: &'static [City],
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self { margins: Margins::CHART, biomes: BIOMES, cities: CITIES }
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self, width: f32, height: f32) -> ChartLayout {
        ChartLayout::new(Viewport::new(width, height), self.margins)
    }

    /// Replaces everything on `surface` with the chart laid out for
    /// `width × height` and returns the group holding it.
    ///
    /// The group starts at the margin offset; zoom transforms are applied to it afterwards.
    pub fn render(&self, surface: &mut Surface, width: f32, height: f32) -> GroupId {
        surface.clear();

        let layout = self.layout(width, height);
        let id = surface.append_group(layout.margin_transform());

        if let Some(group) = surface.group_mut(id) {
            self.draw_biomes(&mut group.list, &layout);
            self.draw_cities(&mut group.list, &layout);
            draw_axes(&mut group.list, &layout);
        }

        log::debug!(
            "chart rendered: inner {}x{}, {} items",
            layout.inner_width,
            layout.inner_height,
            surface.item_count()
        );
        id
    }

    fn draw_biomes(&self, list: &mut DrawList, layout: &ChartLayout) {
        let (x, y) = (layout.x, layout.y);
        for biome in self.biomes {
            let fill = Color::from_hex(biome.color).unwrap_or_else(|| {
                log::warn!("biome {} has invalid colour {}", biome.name, biome.color);
                Color::black()
            });
            // Inverted ranges give negative sizes; they are drawn as-is.
            let rect = Rect::new(
                x.map(biome.min_rain),
                y.map(biome.max_temp),
                x.map(biome.max_rain) - x.map(biome.min_rain),
                y.map(biome.min_temp) - y.map(biome.max_temp),
            );
            list.push_rect(Z_BIOMES, rect, fill, BIOME_OPACITY);
        }
    }

    fn draw_cities(&self, list: &mut DrawList, layout: &ChartLayout) {
        for city in self.cities {
            let center = Vec2::new(layout.x.map(city.rain), layout.y.map(city.temp));
            list.push_circle(Z_CITIES, center, CITY_RADIUS, Color::red(), Some(CITY_CLASS));
        }
    }
}

fn draw_axes(list: &mut DrawList, layout: &ChartLayout) {
    let (iw, ih) = (layout.inner_width, layout.inner_height);

    Axis::bottom(layout.x).ticks(X_TICKS).draw(list, Z_AXES, Vec2::new(0.0, ih));
    list.push_text(
        Z_AXES,
        TextCmd::new(X_LABEL, Vec2::new(iw / 2.0, ih + X_LABEL_OFFSET), FONT_SIZE, Color::black())
            .anchor(TextAnchor::Middle),
    );

    Axis::left(layout.y).ticks(Y_TICKS).draw(list, Z_AXES, Vec2::zero());
    list.push_text(
        Z_AXES,
        TextCmd::new(Y_LABEL, Vec2::new(-Y_LABEL_OFFSET, ih / 2.0), FONT_SIZE, Color::black())
            .anchor(TextAnchor::Middle)
            .rotation(-90.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use biome_engine::coords::Transform;
    use biome_engine::scene::{CircleCmd, DrawCmd, RectCmd};
    use biome_engine::svg::to_svg_document;

    fn render(width: f32, height: f32) -> (Surface, GroupId) {
        let mut surface = Surface::new(Viewport::new(width, height));
        let id = ChartRenderer::new().render(&mut surface, width, height);
        (surface, id)
    }

    fn circles(surface: &Surface, id: GroupId) -> Vec<CircleCmd> {
        surface
            .group(id)
            .map(|g| {
                g.list
                    .iter_in_paint_order()
                    .filter_map(|cmd| match cmd {
                        DrawCmd::Circle(c) => Some(c.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn rects(surface: &Surface, id: GroupId) -> Vec<RectCmd> {
        surface
            .group(id)
            .map(|g| {
                g.list
                    .iter_in_paint_order()
                    .filter_map(|cmd| match cmd {
                        DrawCmd::Rect(r) => Some(r.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn single_group_at_margin_offset() {
        let (surface, id) = render(800.0, 600.0);
        assert_eq!(surface.groups().len(), 1);
        assert_eq!(surface.group(id).map(|g| g.transform), Some(Transform::translation(40.0, 20.0)));
    }

    #[test]
    fn city_markers_follow_scales() {
        let (surface, id) = render(800.0, 600.0);
        let cities = circles(&surface, id);
        assert_eq!(cities.len(), 2);

        let cairo = &cities[0];
        assert!(approx(cairo.center.x, 100.0 / 3000.0 * 740.0));
        assert!(approx(cairo.center.y, 550.0 - 25.0 / 40.0 * 550.0));
        assert_eq!(cairo.radius, 5.0);
        assert_eq!(cairo.fill, Color::red());
        assert_eq!(cairo.class.as_deref(), Some("city"));
    }

    #[test]
    fn biome_rectangles_span_their_ranges() {
        let (surface, id) = render(800.0, 600.0);
        let rects = rects(&surface, id);
        assert_eq!(rects.len(), 2);

        // Desert: rain 0..250, temp 20..35.
        let desert = rects[0].rect;
        assert!(approx(desert.origin.x, 0.0));
        assert!(approx(desert.origin.y, 550.0 - 35.0 / 40.0 * 550.0));
        assert!(approx(desert.size.x, 250.0 / 3000.0 * 740.0));
        assert!(approx(desert.size.y, 15.0 / 40.0 * 550.0));
        assert_eq!(rects[0].opacity, 0.5);
        assert_eq!(rects[1].fill, Color::from_srgb_u8(0, 255, 0, 255));
    }

    #[test]
    fn paint_order_is_biomes_cities_axes() {
        let (surface, id) = render(800.0, 600.0);
        let kinds: Vec<&str> = surface
            .group(id)
            .map(|g| {
                g.list
                    .iter_in_paint_order()
                    .map(|cmd| match cmd {
                        DrawCmd::Rect(_) => "rect",
                        DrawCmd::Circle(_) => "circle",
                        _ => "axis",
                    })
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(&kinds[..4], ["rect", "rect", "circle", "circle"]);
        assert!(kinds[4..].iter().all(|k| *k == "axis"));
    }

    #[test]
    fn axis_labels_are_placed() {
        let (surface, id) = render(800.0, 600.0);
        let labels: Vec<TextCmd> = surface
            .group(id)
            .map(|g| {
                g.list
                    .iter_in_paint_order()
                    .filter_map(|cmd| match cmd {
                        DrawCmd::Text(t) if t.text == X_LABEL || t.text == Y_LABEL => Some(t.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].origin, Vec2::new(370.0, 575.0));
        assert_eq!(labels[1].origin, Vec2::new(-30.0, 275.0));
        assert_eq!(labels[1].rotation, -90.0);
        assert_eq!(labels[1].anchor, TextAnchor::Middle);
    }

    #[test]
    fn redraw_replaces_previous_content() {
        let mut surface = Surface::new(Viewport::new(800.0, 600.0));
        let renderer = ChartRenderer::new();
        let first = renderer.render(&mut surface, 800.0, 600.0);
        let count = surface.item_count();

        surface.resize(Viewport::new(400.0, 300.0));
        let second = renderer.render(&mut surface, 400.0, 300.0);

        assert_eq!(surface.groups().len(), 1);
        assert_eq!(surface.item_count(), count);
        assert!(surface.group(first).is_none());

        let cairo = &circles(&surface, second)[0];
        assert!(approx(cairo.center.x, 100.0 / 3000.0 * 340.0));
    }

    #[test]
    fn identical_renders_serialize_identically() {
        let (a, _) = render(800.0, 600.0);
        let (b, _) = render(800.0, 600.0);
        assert_eq!(to_svg_document(&a), to_svg_document(&b));
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        let (surface, id) = render(0.0, 0.0);
        assert!(surface.group(id).is_some_and(|g| !g.list.is_empty()));
    }
}
