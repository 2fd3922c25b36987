//! Route overlay - the markers and polylines the map draws for the shipment.
//!
//! The overlay has two layouts: the original route through the Suez Canal,
//! and the lower-risk alternate route from a different origin port. Which one
//! is drawn depends only on [`crate::RiskState::show_alternate_route`].

use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn lon(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// A named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub coords: Coordinates,
}

impl Port {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            coords: Coordinates(lon, lat),
        }
    }
}

/// A marker pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub name: String,
    pub caption: String,
    pub coords: Coordinates,
    pub color: String,
}

/// A polyline drawn between waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLine {
    pub id: String,
    pub waypoints: Vec<Coordinates>,
    pub color: String,
    pub width: u32,
}

/// Southwest and northeast corners of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
}

impl Bounds {
    /// Smallest box containing both points.
    pub fn enclosing(a: Coordinates, b: Coordinates) -> Self {
        Self {
            southwest: Coordinates(a.0.min(b.0), a.1.min(b.1)),
            northeast: Coordinates(a.0.max(b.0), a.1.max(b.1)),
        }
    }
}

/// Everything the map needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub markers: Vec<MapMarker>,
    pub routes: Vec<RouteLine>,
    pub bounds: Bounds,
}

/// Colors used by the overlay.
pub mod palette {
    pub const DESTINATION: &str = "#ef4444";
    pub const ORIGIN: &str = "#3b82f6";
    pub const PRIMARY_ROUTE: &str = "#ef4444";
    pub const ALTERNATE: &str = "#10b981";
}

const ROUTE_WIDTH: u32 = 3;

/// Ports that define both route layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOverlay {
    pub origin: Port,
    pub destination: Port,
    /// Intermediate waypoints of the original route.
    #[serde(default)]
    pub via: Vec<Port>,
    pub alternate_origin: Port,
}

impl Default for RouteOverlay {
    fn default() -> Self {
        Self::compliance_demo()
    }
}

impl RouteOverlay {
    /// Jebel Ali to Houston through Suez, with Khalifa Port as the alternate.
    pub fn compliance_demo() -> Self {
        Self {
            origin: Port::new("Jebel Ali", 55.0271, 24.9796),
            destination: Port::new("Houston", -95.3698, 29.7604),
            via: vec![Port::new("Suez Canal", 32.3498, 30.6681)],
            alternate_origin: Port::new("Khalifa Port", 54.6397, 24.8135),
        }
    }

    /// Build the plan for the current route flag.
    pub fn plan(&self, show_alternate: bool) -> RoutePlan {
        let mut markers = vec![MapMarker {
            name: self.destination.name.clone(),
            caption: "Destination".to_string(),
            coords: self.destination.coords,
            color: palette::DESTINATION.to_string(),
        }];

        let route = if show_alternate {
            markers.push(MapMarker {
                name: self.alternate_origin.name.clone(),
                caption: "Alternative Origin".to_string(),
                coords: self.alternate_origin.coords,
                color: palette::ALTERNATE.to_string(),
            });
            RouteLine {
                id: "alt-route".to_string(),
                waypoints: vec![self.alternate_origin.coords, self.destination.coords],
                color: palette::ALTERNATE.to_string(),
                width: ROUTE_WIDTH,
            }
        } else {
            markers.push(MapMarker {
                name: self.origin.name.clone(),
                caption: "Origin".to_string(),
                coords: self.origin.coords,
                color: palette::ORIGIN.to_string(),
            });
            let mut waypoints = Vec::with_capacity(self.via.len() + 2);
            waypoints.push(self.origin.coords);
            waypoints.extend(self.via.iter().map(|p| p.coords));
            waypoints.push(self.destination.coords);
            RouteLine {
                id: "main-route".to_string(),
                waypoints,
                color: palette::PRIMARY_ROUTE.to_string(),
                width: ROUTE_WIDTH,
            }
        };

        RoutePlan {
            markers,
            routes: vec![route],
            // The viewport stays framed on the original lane in both layouts.
            bounds: Bounds::enclosing(self.origin.coords, self.destination.coords),
        }
    }
}
