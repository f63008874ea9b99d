//! Menú lateral
//!
//! No hace peticiones: alterna el menú, marca el enlace activo y pide la
//! navegación al host.

use crate::config::ClientConfig;

pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: &str, label: &str) -> Self {
        Self { href: href.to_string(), label: label.to_string() }
    }
}

/// Enlaces del menú de la aplicación
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/ui/dashboard", "Dashboard"),
        NavLink::new("/ui/usuarios", "Usuários"),
        NavLink::new("/ui/veiculos", "Veículos"),
        NavLink::new("/ui/manutencoes", "Manutenções"),
        NavLink::new("/ui/planos", "Planos"),
        NavLink::new("/ui/veiculos-planos", "Veículos x Planos"),
    ]
}

#[derive(Debug, Clone)]
pub struct NavController {
    links: Vec<NavLink>,
    path: String,
    sidebar_open: bool,
    viewport_width: u32,
    mobile_breakpoint: u32,
    navigation: Option<String>,
}

impl NavController {
    pub fn new(config: &ClientConfig, path: impl Into<String>, viewport_width: u32) -> Self {
        Self {
            links: default_links(),
            path: path.into(),
            sidebar_open: false,
            viewport_width,
            mobile_breakpoint: config.mobile_breakpoint,
            navigation: None,
        }
    }

    pub fn with_links(mut self, links: Vec<NavLink>) -> Self {
        self.links = links;
        self
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
    }

    /// Un enlace está activo si su href es exactamente la ruta actual
    pub fn is_active(&self, link: &NavLink) -> bool {
        link.href == self.path
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| self.is_active(link))
    }

    /// Clic en un enlace: en pantallas estrechas se cierra el menú
    pub fn click_link(&mut self, href: &str) {
        if self.viewport_width <= self.mobile_breakpoint && self.sidebar_open {
            self.sidebar_open = false;
        }
        self.path = href.to_string();
        self.navigation = Some(href.to_string());
    }

    pub fn logout(&mut self) {
        tracing::info!("👋 Logout");
        self.navigation = Some(LOGOUT_PATH.to_string());
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }
}
