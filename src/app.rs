use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::Config;
use crate::ui::about::AboutPage;
use crate::ui::dashboard::DashboardPage;
use crate::ui::{home, nav};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// Pages and UI events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    About,
}

/// Transient message shown at the bottom of the window.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}

/// Requests raised by page widgets, handled after the frame is laid out.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Navigate(Page),
    Notify(Notice),
}

/// Page-owned state. Switching pages drops the old state.
enum ActivePage {
    Home,
    Dashboard(DashboardPage),
    About(AboutPage),
}

impl ActivePage {
    fn page(&self) -> Page {
        match self {
            ActivePage::Home => Page::Home,
            ActivePage::Dashboard(_) => Page::Dashboard,
            ActivePage::About(_) => Page::About,
        }
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CyberAnalyticsApp {
    config: Config,
    active: ActivePage,
    notice: Option<Notice>,
}

impl CyberAnalyticsApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            active: ActivePage::Home,
            notice: None,
        }
    }

    fn navigate(&mut self, page: Page, ctx: &egui::Context) {
        if page == self.active.page() {
            return;
        }
        log::info!("Opening {page:?} page");
        self.active = match page {
            Page::Home => ActivePage::Home,
            Page::Dashboard => ActivePage::Dashboard(DashboardPage::open(&self.config, ctx)),
            Page::About => ActivePage::About(AboutPage::new(&self.config)),
        };
    }

    fn handle(&mut self, event: AppEvent, ctx: &egui::Context) {
        match event {
            AppEvent::Navigate(page) => self.navigate(page, ctx),
            AppEvent::Notify(notice) => self.notice = Some(notice),
        }
    }
}

impl eframe::App for CyberAnalyticsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        // ---- Top panel: navigation ----
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            nav::top_bar(ui, self.active.page(), &mut events);
        });

        // ---- Bottom panel: notice + footer ----
        if self.notice.as_ref().is_some_and(Notice::expired) {
            self.notice = None;
        }
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            if let Some(notice) = &self.notice {
                nav::notice(ui, notice);
                ctx.request_repaint_after(NOTICE_TTL);
            }
            nav::footer(ui);
        });

        // ---- Central panel: active page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &mut self.active {
                    ActivePage::Home => home::show(ui, &self.config, &mut events),
                    ActivePage::Dashboard(page) => page.show(ui, &self.config, &mut events),
                    ActivePage::About(page) => page.show(ui, &mut events),
                });
        });

        for event in events {
            self.handle(event, ctx);
        }
    }
}
