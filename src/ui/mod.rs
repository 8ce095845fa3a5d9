pub mod about;
pub mod charts;
pub mod comparador;
pub mod evolucao;
pub mod inicio;
pub mod metodologia;
pub mod panorama;
pub mod ranking;
pub mod sidebar;
pub mod status;
pub mod widgets;
