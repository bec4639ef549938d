//! Hard-coded sample datasets.

/// A climate biome: a temperature × rainfall range drawn as a rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Biome {
    pub name: &'static str,
    /// °C
    pub min_temp: f32,
    pub max_temp: f32,
    /// mm per year
    pub min_rain: f32,
    pub max_rain: f32,
    /// `#rrggbb`
    pub color: &'static str,
}

/// A sample city plotted as a marker at `(rain, temp)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub temp: f32,
    pub rain: f32,
}

pub const BIOMES: &[Biome] = &[
    Biome {
        name: "Desert",
        min_temp: 20.0,
        max_temp: 35.0,
        min_rain: 0.0,
        max_rain: 250.0,
        color: "#FFFF00",
    },
    Biome {
        name: "Tropical Rainforest",
        min_temp: 20.0,
        max_temp: 30.0,
        min_rain: 1500.0,
        max_rain: 3000.0,
        color: "#00FF00",
    },
];

pub const CITIES: &[City] = &[
    City { name: "Cairo", temp: 25.0, rain: 100.0 },
    City { name: "Rio", temp: 28.0, rain: 2000.0 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use biome_engine::paint::Color;

    #[test]
    fn biome_colors_parse() {
        for biome in BIOMES {
            assert!(Color::from_hex(biome.color).is_some(), "{}", biome.name);
            assert!(biome.min_temp <= biome.max_temp);
            assert!(biome.min_rain <= biome.max_rain);
        }
    }

    #[test]
    fn cities_fall_inside_chart_domain() {
        for city in CITIES {
            assert!((0.0..=3000.0).contains(&city.rain), "{}", city.name);
            assert!((0.0..=40.0).contains(&city.temp), "{}", city.name);
        }
    }
}
