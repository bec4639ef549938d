use crate::coords::Vec2;
use crate::scene::{DrawCmd, Group, Stroke, Surface, TextAnchor};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "sans-serif";

/// Serializes `surface` as a standalone SVG document sized exactly like the surface.
pub fn to_svg_document(surface: &Surface) -> String {
    let size = surface.size();
    let mut elements = Vec::with_capacity(surface.item_count() + 2 * surface.groups().len());

    for group in surface.groups() {
        write_group(&mut elements, group);
    }

    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
        w = num(size.width),
        h = num(size.height),
        body = elements.concat(),
    )
}

/// Escapes the XML-significant characters of text content and attribute values.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_group(out: &mut Vec<String>, group: &Group) {
    if group.transform.is_identity() {
        out.push("  <g>\n".to_string());
    } else {
        out.push(format!("  <g transform=\"{}\">\n", group.transform));
    }

    for cmd in group.list.iter_in_paint_order() {
        out.push(format!("    {}\n", element(cmd)));
    }

    out.push("  </g>\n".to_string());
}

fn element(cmd: &DrawCmd) -> String {
    match cmd {
        DrawCmd::Rect(r) => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>",
            num(r.rect.origin.x),
            num(r.rect.origin.y),
            num(r.rect.size.x),
            num(r.rect.size.y),
            r.fill.to_hex(),
            opacity_attr(r.opacity * r.fill.alpha()),
        ),
        DrawCmd::Circle(c) => {
            let class = c
                .class
                .as_deref()
                .map(|cls| format!(" class=\"{}\"", escape_text(cls)))
                .unwrap_or_default();
            format!(
                "<circle{class} cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>",
                num(c.center.x),
                num(c.center.y),
                num(c.radius),
                c.fill.to_hex(),
                opacity_attr(c.fill.alpha()),
            )
        }
        DrawCmd::Line(l) => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            num(l.from.x),
            num(l.from.y),
            num(l.to.x),
            num(l.to.y),
            stroke_attrs(l.stroke),
        ),
        DrawCmd::Path(p) => format!(
            "<path d=\"{}\" fill=\"none\"{}/>",
            path_data(&p.points),
            stroke_attrs(p.stroke),
        ),
        DrawCmd::Text(t) => {
            let mut attrs = format!(
                "x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{FONT_FAMILY}\" fill=\"{}\"",
                num(t.origin.x),
                num(t.origin.y),
                num(t.size),
                t.fill.to_hex(),
            );
            if t.anchor != TextAnchor::Start {
                attrs.push_str(&format!(" text-anchor=\"{}\"", t.anchor.as_str()));
            }
            if t.baseline_shift != 0.0 {
                attrs.push_str(&format!(" dy=\"{}em\"", num(t.baseline_shift)));
            }
            if t.rotation != 0.0 {
                attrs.push_str(&format!(
                    " transform=\"rotate({} {} {})\"",
                    num(t.rotation),
                    num(t.origin.x),
                    num(t.origin.y),
                ));
            }
            format!("<text {attrs}>{}</text>", escape_text(&t.text))
        }
    }
}

fn stroke_attrs(stroke: Stroke) -> String {
    format!(
        " stroke=\"{}\" stroke-width=\"{}\"{}",
        stroke.color.to_hex(),
        num(stroke.width),
        if stroke.color.is_opaque() {
            String::new()
        } else {
            format!(" stroke-opacity=\"{}\"", num(stroke.color.alpha()))
        },
    )
}

fn opacity_attr(opacity: f32) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(" opacity=\"{}\"", num(opacity.max(0.0)))
    }
}

fn path_data(points: &[Vec2]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format!("{},{}", num(p.x), num(p.y)));
    }
    d
}

/// Shortest round-trip formatting with `-0` folded to `0`.
fn num(v: f32) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Transform, Viewport};
    use crate::paint::Color;
    use crate::scene::{TextCmd, ZIndex};

    fn surface_with_group() -> (Surface, crate::scene::GroupId) {
        let mut surface = Surface::new(Viewport::new(800.0, 600.0));
        let id = surface.append_group(Transform::translation(40.0, 20.0));
        (surface, id)
    }

    #[test]
    fn document_is_sized_like_the_surface() {
        let surface = Surface::new(Viewport::new(800.0, 600.0));
        let svg = to_svg_document(&surface);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"600\" viewBox=\"0 0 800 600\">"
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn group_carries_its_transform() {
        let (surface, _) = surface_with_group();
        let svg = to_svg_document(&surface);
        assert!(svg.contains("<g transform=\"translate(40,20) scale(1)\">"));
    }

    #[test]
    fn rect_and_circle_attributes() {
        let (mut surface, id) = surface_with_group();
        let list = &mut surface.group_mut(id).unwrap().list;
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.5, 10.0, 20.0), Color::from_hex("#FFFF00").unwrap(), 0.5);
        list.push_circle(ZIndex(1), Vec2::new(3.0, 4.0), 5.0, Color::red(), Some("city"));

        let svg = to_svg_document(&surface);
        assert!(svg.contains("<rect x=\"0\" y=\"0.5\" width=\"10\" height=\"20\" fill=\"#ffff00\" opacity=\"0.5\"/>"));
        assert!(svg.contains("<circle class=\"city\" cx=\"3\" cy=\"4\" r=\"5\" fill=\"#ff0000\"/>"));
    }

    #[test]
    fn negative_rect_is_written_as_is() {
        let (mut surface, id) = surface_with_group();
        surface
            .group_mut(id)
            .unwrap()
            .list
            .push_rect(ZIndex(0), Rect::new(5.0, 5.0, -3.0, 2.0), Color::black(), 1.0);
        assert!(to_svg_document(&surface).contains("width=\"-3\""));
    }

    #[test]
    fn text_is_escaped_and_rotated_about_its_anchor() {
        let (mut surface, id) = surface_with_group();
        let text = TextCmd::new("Rain <mm> & °C", Vec2::new(-30.0, 275.0), 10.0, Color::black())
            .anchor(TextAnchor::Middle)
            .rotation(-90.0);
        surface.group_mut(id).unwrap().list.push_text(ZIndex(0), text);

        let svg = to_svg_document(&surface);
        assert!(svg.contains("Rain &lt;mm&gt; &amp; °C</text>"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("transform=\"rotate(-90 -30 275)\""));
    }

    #[test]
    fn path_is_unfilled_polyline() {
        let (mut surface, id) = surface_with_group();
        let points = vec![Vec2::new(0.5, 6.0), Vec2::new(0.5, 0.5), Vec2::new(740.5, 0.5)];
        surface
            .group_mut(id)
            .unwrap()
            .list
            .push_path(ZIndex(0), points, Stroke::new(1.0, Color::black()));
        let svg = to_svg_document(&surface);
        assert!(svg.contains("<path d=\"M0.5,6L0.5,0.5L740.5,0.5\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\"/>"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let (mut surface, id) = surface_with_group();
        surface.group_mut(id).unwrap().list.push_circle(ZIndex(0), Vec2::new(1.0, 2.0), 5.0, Color::red(), None);
        assert_eq!(to_svg_document(&surface), to_svg_document(&surface));
    }
}
