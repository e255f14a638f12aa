//! Map numbers and statuses to display bands and colors

use ratatui::style::Color;

/// Temperature band for live conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < 15.0 {
            TemperatureBand::Cold
        } else if celsius < 22.0 {
            TemperatureBand::Mild
        } else if celsius < 28.0 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TemperatureBand::Cold => Color::Rgb(100, 180, 255),
            TemperatureBand::Mild => Color::Rgb(120, 220, 160),
            TemperatureBand::Warm => Color::Rgb(255, 200, 80),
            TemperatureBand::Hot => Color::Rgb(255, 110, 80),
        }
    }
}

/// Relative humidity band for live conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumidityBand {
    Dry,
    Comfortable,
    Humid,
    Saturated,
}

impl HumidityBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 40.0 {
            HumidityBand::Dry
        } else if percent < 60.0 {
            HumidityBand::Comfortable
        } else if percent < 80.0 {
            HumidityBand::Humid
        } else {
            HumidityBand::Saturated
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HumidityBand::Dry => "dry",
            HumidityBand::Comfortable => "comfortable",
            HumidityBand::Humid => "humid",
            HumidityBand::Saturated => "saturated",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            HumidityBand::Dry => Color::Rgb(230, 180, 90),
            HumidityBand::Comfortable => Color::Rgb(120, 220, 160),
            HumidityBand::Humid => Color::Rgb(90, 170, 255),
            HumidityBand::Saturated => Color::Rgb(70, 110, 230),
        }
    }
}

/// Status attached to a key metric card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricStatus {
    Optimal,
    Good,
    High,
    Rising,
}

impl MetricStatus {
    pub fn color(&self) -> Color {
        match self {
            MetricStatus::Optimal => Color::Green,
            MetricStatus::Good => Color::Blue,
            MetricStatus::High => Color::Rgb(255, 150, 50),
            MetricStatus::Rising => Color::Rgb(80, 200, 150),
        }
    }
}

/// Priority of an alert, recommendation or risk
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "baja",
            Priority::Medium => "media",
            Priority::High => "alta",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Priority::Low => Color::Green,
            Priority::Medium => Color::Yellow,
            Priority::High => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_band_boundaries() {
        assert_eq!(TemperatureBand::from_celsius(-3.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_celsius(14.9), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_celsius(15.0), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(21.9), TemperatureBand::Mild);
        assert_eq!(TemperatureBand::from_celsius(22.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_celsius(24.0), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_celsius(28.0), TemperatureBand::Hot);
    }

    #[test]
    fn test_humidity_band_boundaries() {
        assert_eq!(HumidityBand::from_percent(39.9), HumidityBand::Dry);
        assert_eq!(HumidityBand::from_percent(40.0), HumidityBand::Comfortable);
        assert_eq!(HumidityBand::from_percent(60.0), HumidityBand::Humid);
        assert_eq!(HumidityBand::from_percent(78.0), HumidityBand::Humid);
        assert_eq!(HumidityBand::from_percent(80.0), HumidityBand::Saturated);
        assert_eq!(HumidityBand::from_percent(100.0), HumidityBand::Saturated);
    }

    #[test]
    fn test_priority_order_and_colors() {
        assert!(Priority::High > Priority::Low);
        assert_eq!(Priority::High.color(), Color::Red);
        assert_eq!(Priority::Medium.label(), "media");
        assert_ne!(MetricStatus::Optimal.color(), MetricStatus::High.color());
    }
}
