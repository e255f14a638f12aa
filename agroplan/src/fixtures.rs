//! Static display data for the simulated planning tabs
//!
//! Everything here is read-only and known at compile time. Only the farm
//! tab's live conditions come from the network.

use crate::thresholds::{MetricStatus, Priority};

pub const CROP_NAMES: [&str; 4] = ["Café", "Arroz", "Frijoles", "Maíz"];
pub const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

// ===== Overview =====

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    Active,
    Processing,
    Ready,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Processing => "processing",
            AgentStatus::Ready => "ready",
        }
    }
}

#[derive(Debug)]
pub struct Agent {
    pub name: &'static str,
    pub status: AgentStatus,
    /// Model accuracy, percent
    pub accuracy: u16,
    pub description: &'static str,
}

pub const AGENTS: [Agent; 5] = [
    Agent {
        name: "Climate Forecaster",
        status: AgentStatus::Active,
        accuracy: 94,
        description: "Análisis climático avanzado con IA",
    },
    Agent {
        name: "Crop Modeling",
        status: AgentStatus::Active,
        accuracy: 87,
        description: "Simulación de rendimientos por cultivo",
    },
    Agent {
        name: "Market Predictor",
        status: AgentStatus::Processing,
        accuracy: 91,
        description: "Proyecciones de precios y demanda",
    },
    Agent {
        name: "Scenario Planner",
        status: AgentStatus::Active,
        accuracy: 89,
        description: "Planificación estratégica integrada",
    },
    Agent {
        name: "Report Generator",
        status: AgentStatus::Ready,
        accuracy: 96,
        description: "Reportes automáticos multimodales",
    },
];

#[derive(Debug)]
pub struct SeasonSummary {
    pub region: &'static str,
    pub season: &'static str,
    pub start: &'static str,
    pub total_area: &'static str,
    pub estimated_value: &'static str,
}

pub const SEASON: SeasonSummary = SeasonSummary {
    region: "Valle Central, Costa Rica",
    season: "Temporada 2024-2025",
    start: "Octubre 2024",
    total_area: "125,000 hectáreas",
    estimated_value: "$2.8B USD",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
    pub priority: Priority,
}

pub const ALERTS: [Alert; 3] = [
    Alert {
        kind: AlertKind::Warning,
        message: "Posible sequía en región Norte - Abril 2025",
        priority: Priority::High,
    },
    Alert {
        kind: AlertKind::Success,
        message: "Condiciones óptimas para siembra de café detectadas",
        priority: Priority::Medium,
    },
    Alert {
        kind: AlertKind::Info,
        message: "Nuevos datos de mercado internacional disponibles",
        priority: Priority::Low,
    },
];

// ===== Farm =====

#[derive(Debug)]
pub struct FarmProfile {
    pub region: &'static str,
    pub soil_type: &'static str,
    pub microclimate: &'static str,
}

pub const FARM_PROFILE: FarmProfile = FarmProfile {
    region: "Cartago, Costa Rica",
    soil_type: "Andisol volcánico",
    microclimate: "Subtropical húmedo",
};

#[derive(Debug)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub status: MetricStatus,
}

pub const KEY_METRICS: [KeyMetric; 4] = [
    KeyMetric {
        label: "Temperatura",
        value: "22°C",
        status: MetricStatus::Optimal,
    },
    KeyMetric {
        label: "Humedad",
        value: "78%",
        status: MetricStatus::High,
    },
    KeyMetric {
        label: "Precipitación",
        value: "15mm",
        status: MetricStatus::Good,
    },
    KeyMetric {
        label: "Precio Café",
        value: "$2.85/kg",
        status: MetricStatus::Rising,
    },
];

#[derive(Debug)]
pub struct Recommendation {
    pub category: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub const TODAY_RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        category: "Riego",
        priority: Priority::High,
        title: "Suspender riego por 2 días",
        description: "Se esperan 15-20mm de lluvia en las próximas 48 horas",
        action: "Revisar drenajes",
    },
    Recommendation {
        category: "Nutrición",
        priority: Priority::Medium,
        title: "Aplicar fertilizante foliar",
        description: "Condiciones óptimas para absorción de nutrientes",
        action: "Aplicar antes de las 10:00 AM",
    },
    Recommendation {
        category: "Cosecha",
        priority: Priority::High,
        title: "Ventana óptima de cosecha",
        description: "Café alcanzó 22% de humedad ideal",
        action: "Cosechar lotes 3 y 4",
    },
];

#[derive(Debug)]
pub struct DayOutlook {
    pub day: &'static str,
    pub temperature: f64,
    pub rain_mm: u64,
    pub humidity: f64,
    pub recommendation: &'static str,
}

pub const WEEKLY_FORECAST: [DayOutlook; 5] = [
    DayOutlook {
        day: "Hoy",
        temperature: 22.0,
        rain_mm: 15,
        humidity: 78.0,
        recommendation: "Suspender riego",
    },
    DayOutlook {
        day: "Mañana",
        temperature: 21.0,
        rain_mm: 8,
        humidity: 82.0,
        recommendation: "Monitorear plagas",
    },
    DayOutlook {
        day: "Miércoles",
        temperature: 24.0,
        rain_mm: 2,
        humidity: 65.0,
        recommendation: "Riego ligero",
    },
    DayOutlook {
        day: "Jueves",
        temperature: 25.0,
        rain_mm: 0,
        humidity: 58.0,
        recommendation: "Riego normal",
    },
    DayOutlook {
        day: "Viernes",
        temperature: 23.0,
        rain_mm: 5,
        humidity: 72.0,
        recommendation: "Fertilización foliar",
    },
];

// ===== Climate =====

/// A labelled figure with its change against the previous period
#[derive(Debug)]
pub struct TrendMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl TrendMetric {
    pub fn is_rising(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Mean temperature (°C) and precipitation (mm) per month
pub const CLIMATE_MONTHLY: [(u64, u64); 12] = [
    (24, 45),
    (25, 38),
    (26, 52),
    (27, 78),
    (26, 156),
    (25, 189),
    (24, 165),
    (25, 142),
    (25, 198),
    (24, 225),
    (23, 156),
    (23, 89),
];

/// Longest prediction window on the climate tab, months
pub const CLIMATE_RANGE_MAX: usize = 12;
/// Prediction window the climate tab opens with, months
pub const CLIMATE_RANGE_DEFAULT: usize = 6;

#[derive(Debug)]
pub struct ClimateScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub risk: Priority,
    /// Multiplier applied to monthly precipitation
    pub precipitation_factor: f64,
    /// Offset applied to monthly temperature, °C
    pub temperature_offset: f64,
}

pub const CLIMATE_SCENARIOS: [ClimateScenario; 4] = [
    ClimateScenario {
        name: "Escenario Normal",
        description: "Condiciones climáticas promedio histórico",
        risk: Priority::Low,
        precipitation_factor: 1.0,
        temperature_offset: 0.0,
    },
    ClimateScenario {
        name: "Sequía Prolongada",
        description: "Reducción del 40% en precipitaciones",
        risk: Priority::High,
        precipitation_factor: 0.6,
        temperature_offset: 0.0,
    },
    ClimateScenario {
        name: "Lluvias Intensas",
        description: "Aumento del 60% en precipitaciones",
        risk: Priority::Medium,
        precipitation_factor: 1.6,
        temperature_offset: 0.0,
    },
    ClimateScenario {
        name: "Ola de Calor",
        description: "Temperaturas 3°C por encima del promedio",
        risk: Priority::High,
        precipitation_factor: 1.0,
        temperature_offset: 3.0,
    },
];

pub const CLIMATE_METRICS: [TrendMetric; 4] = [
    TrendMetric {
        label: "Temperatura Promedio",
        value: "25.2°C",
        change: "+1.2°C",
    },
    TrendMetric {
        label: "Precipitación Acumulada",
        value: "1,433mm",
        change: "-15%",
    },
    TrendMetric {
        label: "Humedad Relativa",
        value: "78%",
        change: "+3%",
    },
    TrendMetric {
        label: "Velocidad del Viento",
        value: "12 km/h",
        change: "-2%",
    },
];

// ===== Crops =====

#[derive(Debug)]
pub struct CropProfile {
    pub name: &'static str,
    /// Tonnes per hectare
    pub current_yield: f64,
    pub projected_yield: f64,
    pub area: &'static str,
    pub value: &'static str,
    pub growth: &'static str,
    pub risk: Priority,
}

pub const CROPS: [CropProfile; 4] = [
    CropProfile {
        name: "Café",
        current_yield: 1.2,
        projected_yield: 1.4,
        area: "45,000 ha",
        value: "$890M",
        growth: "+16.7%",
        risk: Priority::Medium,
    },
    CropProfile {
        name: "Arroz",
        current_yield: 4.8,
        projected_yield: 5.1,
        area: "32,000 ha",
        value: "$540M",
        growth: "+6.3%",
        risk: Priority::Low,
    },
    CropProfile {
        name: "Frijoles",
        current_yield: 0.9,
        projected_yield: 1.0,
        area: "28,000 ha",
        value: "$320M",
        growth: "+11.1%",
        risk: Priority::Medium,
    },
    CropProfile {
        name: "Maíz",
        current_yield: 3.2,
        projected_yield: 3.5,
        area: "20,000 ha",
        value: "$280M",
        growth: "+9.4%",
        risk: Priority::High,
    },
];

/// Yield per region, t/ha, columns in [`CROP_NAMES`] order
pub const REGIONAL_YIELDS: [(&str, [f64; 4]); 5] = [
    ("Norte", [1.3, 5.2, 1.1, 3.8]),
    ("Central", [1.4, 4.9, 0.9, 3.2]),
    ("Sur", [1.2, 4.6, 1.0, 3.4]),
    ("Pacífico", [1.5, 5.1, 0.8, 3.6]),
    ("Caribe", [1.1, 4.8, 1.2, 3.1]),
];

#[derive(Debug)]
pub struct OptimizationFactor {
    pub factor: &'static str,
    pub actual: u16,
    pub optimal: u16,
}

pub const OPTIMIZATION_FACTORS: [OptimizationFactor; 6] = [
    OptimizationFactor {
        factor: "Fertilización",
        actual: 65,
        optimal: 85,
    },
    OptimizationFactor {
        factor: "Riego",
        actual: 78,
        optimal: 90,
    },
    OptimizationFactor {
        factor: "Rotación",
        actual: 45,
        optimal: 75,
    },
    OptimizationFactor {
        factor: "Control de plagas",
        actual: 82,
        optimal: 88,
    },
    OptimizationFactor {
        factor: "Timing",
        actual: 70,
        optimal: 92,
    },
    OptimizationFactor {
        factor: "Densidad",
        actual: 68,
        optimal: 80,
    },
];

// ===== Market =====

/// USD/kg per month, columns in [`CROP_NAMES`] order
pub const MONTHLY_PRICES: [[f64; 4]; 12] = [
    [4.2, 0.8, 1.2, 0.6],
    [4.4, 0.9, 1.3, 0.7],
    [4.8, 0.85, 1.25, 0.65],
    [5.1, 0.82, 1.4, 0.68],
    [5.3, 0.78, 1.5, 0.7],
    [5.0, 0.8, 1.45, 0.72],
    [4.9, 0.85, 1.3, 0.68],
    [5.2, 0.9, 1.35, 0.75],
    [5.4, 0.95, 1.4, 0.78],
    [5.6, 1.0, 1.5, 0.8],
    [5.8, 1.05, 1.6, 0.82],
    [6.0, 1.1, 1.7, 0.85],
];

#[derive(Debug)]
pub struct MarketHorizon {
    pub label: &'static str,
    pub months: usize,
}

pub const MARKET_HORIZONS: [MarketHorizon; 3] = [
    MarketHorizon {
        label: "3 Meses",
        months: 3,
    },
    MarketHorizon {
        label: "6 Meses",
        months: 6,
    },
    MarketHorizon {
        label: "12 Meses",
        months: 12,
    },
];

pub const TARGET_MARKETS: [&str; 3] = [
    "Mercado Internacional",
    "Mercado Doméstico",
    "Mercado Regional",
];

/// Export destinations and their share, percent
pub const MARKET_SHARE: [(&str, u64); 5] = [
    ("Estados Unidos", 35),
    ("Europa", 28),
    ("Asia", 22),
    ("América Latina", 10),
    ("Otros", 5),
];

#[derive(Debug)]
pub struct SupplyStage {
    pub stage: &'static str,
    pub current: u16,
    pub optimized: u16,
    pub cost: u16,
}

pub const SUPPLY_CHAIN: [SupplyStage; 5] = [
    SupplyStage {
        stage: "Producción",
        current: 100,
        optimized: 100,
        cost: 45,
    },
    SupplyStage {
        stage: "Procesamiento",
        current: 95,
        optimized: 98,
        cost: 15,
    },
    SupplyStage {
        stage: "Almacenamiento",
        current: 92,
        optimized: 96,
        cost: 8,
    },
    SupplyStage {
        stage: "Transporte",
        current: 88,
        optimized: 94,
        cost: 18,
    },
    SupplyStage {
        stage: "Distribución",
        current: 85,
        optimized: 92,
        cost: 14,
    },
];

pub const MARKET_METRICS: [TrendMetric; 4] = [
    TrendMetric {
        label: "Precio Promedio",
        value: "$5.20/kg",
        change: "+12.5%",
    },
    TrendMetric {
        label: "Demanda Global",
        value: "2.8M ton",
        change: "+8.3%",
    },
    TrendMetric {
        label: "Inventarios",
        value: "180k ton",
        change: "-15.2%",
    },
    TrendMetric {
        label: "Volatilidad",
        value: "18.5%",
        change: "+2.1%",
    },
];

// ===== Scenarios =====

#[derive(Debug)]
pub struct PlanType {
    pub name: &'static str,
    pub scope: &'static str,
    pub duration: &'static str,
    pub budget: &'static str,
    pub regions: u8,
}

pub const PLAN_TYPES: [PlanType; 3] = [
    PlanType {
        name: "Plan Nacional",
        scope: "Todo el país",
        duration: "5 años",
        budget: "$2.8B",
        regions: 7,
    },
    PlanType {
        name: "Plan Regional",
        scope: "Valle Central",
        duration: "3 años",
        budget: "$850M",
        regions: 3,
    },
    PlanType {
        name: "Plan Cooperativa",
        scope: "COOCAFE",
        duration: "2 años",
        budget: "$120M",
        regions: 1,
    },
];

pub const PLANNING_HORIZONS: [&str; 4] = ["2 Años", "3 Años", "5 Años", "10 Años"];
/// Index into [`PLANNING_HORIZONS`] the scenarios tab opens with
pub const PLANNING_HORIZON_DEFAULT: usize = 2;

#[derive(Debug)]
pub struct Objective {
    pub title: &'static str,
    pub target: &'static str,
    /// Progress towards the target, percent
    pub progress: u16,
    pub status: &'static str,
    pub priority: Priority,
}

pub const STRATEGIC_OBJECTIVES: [Objective; 4] = [
    Objective {
        title: "Incrementar Productividad",
        target: "25% en 5 años",
        progress: 68,
        status: "en progreso",
        priority: Priority::High,
    },
    Objective {
        title: "Reducir Riesgos Climáticos",
        target: "50% vulnerabilidad",
        progress: 45,
        status: "en progreso",
        priority: Priority::High,
    },
    Objective {
        title: "Optimizar Mercados",
        target: "15% nuevos mercados",
        progress: 32,
        status: "planificado",
        priority: Priority::Medium,
    },
    Objective {
        title: "Sostenibilidad Ambiental",
        target: "Carbon neutral 2030",
        progress: 28,
        status: "iniciado",
        priority: Priority::Medium,
    },
];

#[derive(Debug)]
pub struct PlanScenario {
    pub name: &'static str,
    /// Percent
    pub probability: u64,
    pub impact: &'static str,
    pub description: &'static str,
    pub productivity: &'static str,
    pub revenue: &'static str,
}

pub const PLAN_SCENARIOS: [PlanScenario; 3] = [
    PlanScenario {
        name: "Escenario Base",
        probability: 45,
        impact: "Medio",
        description: "Condiciones normales de mercado y clima",
        productivity: "+12%",
        revenue: "+$340M",
    },
    PlanScenario {
        name: "Escenario Optimista",
        probability: 25,
        impact: "Alto",
        description: "Demanda global alta, clima favorable",
        productivity: "+28%",
        revenue: "+$890M",
    },
    PlanScenario {
        name: "Escenario de Crisis",
        probability: 30,
        impact: "Alto",
        description: "Cambio climático severo, volatilidad de mercados",
        productivity: "-8%",
        revenue: "-$220M",
    },
];

/// Integration readiness per quarter, percent
pub const INTEGRATION_TIMELINE: [(&str, u64); 6] = [
    ("Q1 25", 72),
    ("Q2 25", 80),
    ("Q3 25", 86),
    ("Q4 25", 89),
    ("Q1 26", 91),
    ("Q2 26", 93),
];

// ===== Reports =====

#[derive(Debug)]
pub struct ReportTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub pages: &'static str,
    pub audience: &'static str,
}

pub const REPORT_TEMPLATES: [ReportTemplate; 4] = [
    ReportTemplate {
        name: "Reporte Ejecutivo",
        description: "Resumen para tomadores de decisiones",
        pages: "8-12 páginas",
        audience: "Directivos",
    },
    ReportTemplate {
        name: "Reporte Técnico",
        description: "Análisis detallado con metodología",
        pages: "25-35 páginas",
        audience: "Especialistas",
    },
    ReportTemplate {
        name: "Reporte de Políticas",
        description: "Recomendaciones para políticas públicas",
        pages: "15-20 páginas",
        audience: "Gobierno",
    },
    ReportTemplate {
        name: "Reporte Cooperativa",
        description: "Análisis operacional para cooperativas",
        pages: "18-22 páginas",
        audience: "Cooperativas",
    },
];

pub const REPORT_METRICS: [TrendMetric; 4] = [
    TrendMetric {
        label: "Reportes Generados",
        value: "1,247",
        change: "+23%",
    },
    TrendMetric {
        label: "Tiempo Promedio",
        value: "3.2 min",
        change: "-15%",
    },
    TrendMetric {
        label: "Precisión IA",
        value: "94.7%",
        change: "+2.1%",
    },
    TrendMetric {
        label: "Satisfacción",
        value: "4.8/5",
        change: "+0.3",
    },
];

pub const REPORT_FORMATS: [&str; 4] = ["PDF", "Microsoft Word", "PowerPoint", "HTML Interactivo"];

#[derive(Debug)]
pub struct RecentReport {
    pub title: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub downloads: u32,
    pub format: &'static str,
}

pub const RECENT_REPORTS: [RecentReport; 4] = [
    RecentReport {
        title: "Análisis Temporada Café 2024-2025",
        kind: "Ejecutivo",
        date: "2024-12-15",
        status: "Completado",
        downloads: 127,
        format: "PDF",
    },
    RecentReport {
        title: "Proyecciones Climáticas Q1 2025",
        kind: "Técnico",
        date: "2024-12-14",
        status: "Completado",
        downloads: 89,
        format: "PowerPoint",
    },
    RecentReport {
        title: "Recomendaciones Política Agrícola",
        kind: "Políticas",
        date: "2024-12-13",
        status: "En revisión",
        downloads: 45,
        format: "Word",
    },
    RecentReport {
        title: "Plan Estratégico COOCAFE",
        kind: "Cooperativa",
        date: "2024-12-12",
        status: "Completado",
        downloads: 67,
        format: "PDF",
    },
];

#[derive(Debug)]
pub struct ContentSection {
    pub name: &'static str,
    pub included: bool,
    /// Share of the section drafted automatically, percent
    pub ai_generated: u16,
}

pub const CONTENT_SECTIONS: [ContentSection; 8] = [
    ContentSection {
        name: "Resumen Ejecutivo",
        included: true,
        ai_generated: 95,
    },
    ContentSection {
        name: "Análisis Climático",
        included: true,
        ai_generated: 87,
    },
    ContentSection {
        name: "Proyecciones de Cultivos",
        included: true,
        ai_generated: 91,
    },
    ContentSection {
        name: "Análisis de Mercado",
        included: true,
        ai_generated: 89,
    },
    ContentSection {
        name: "Recomendaciones",
        included: true,
        ai_generated: 93,
    },
    ContentSection {
        name: "Gráficos y Visualizaciones",
        included: true,
        ai_generated: 88,
    },
    ContentSection {
        name: "Anexos Técnicos",
        included: false,
        ai_generated: 85,
    },
    ContentSection {
        name: "Metodología",
        included: false,
        ai_generated: 92,
    },
];
