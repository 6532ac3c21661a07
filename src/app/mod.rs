pub mod forms;
pub mod handlers;
pub mod ui_components;
pub mod view;

pub use forms::{FormErrors, RuleForm, SegmentForm};

use iced::{Element, Task};
use netsketch::config::AppConfig;
use netsketch::core::export::{self, ExportFormat};
use netsketch::core::network::{Action, Position, Protocol};
use netsketch::core::storage::{FileStore, KeyValueStore, MemoryStore};
use netsketch::core::store::NetworkStore;
use netsketch::core::topology::{CanvasSize, DragState};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Lifetime of a notification banner
pub const BANNER_SECS: u64 = 3;

/// Maximum banners kept at once; older ones are dropped first
const MAX_BANNERS: usize = 4;

/// Everything `State::new` needs from the command line and config file
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Where collections and config live; `None` when no data dir exists
    pub data_dir: Option<PathBuf>,
    /// Keep everything in memory for this session
    pub ephemeral: bool,
    pub config: AppConfig,
}

impl LaunchOptions {
    fn storage(&self) -> Box<dyn KeyValueStore> {
        match (&self.data_dir, self.ephemeral) {
            (Some(dir), false) => Box::new(FileStore::new(dir)),
            (None, false) => {
                tracing::warn!("No data directory available; changes will not be saved");
                Box::new(MemoryStore::new())
            }
            (_, true) => Box::new(MemoryStore::new()),
        }
    }

    /// Directory to save preferences into, if they should be saved at all
    fn config_dir(&self) -> Option<PathBuf> {
        if self.ephemeral {
            None
        } else {
            self.data_dir.clone()
        }
    }
}

pub struct State {
    pub store: NetworkStore,
    pub theme: crate::theme::AppTheme,
    pub active_tab: Tab,
    pub segment_form: Option<SegmentForm>,
    pub rule_form: Option<RuleForm>,
    pub form_errors: Option<FormErrors>,
    pub drag: DragState,
    pub export_format: ExportFormat,
    /// Export preview text, refreshed after every data or format change
    pub cached_preview: String,
    pub banners: Vec<Banner>,
    pub config_dir: Option<PathBuf>,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Tab {
    #[default]
    Dashboard,
    Segments,
    #[strum(to_string = "Firewall Rules")]
    Rules,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub severity: BannerSeverity,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabChanged(Tab),
    // Segments
    AddSegmentClicked,
    EditSegmentClicked(Uuid),
    CancelSegmentForm,
    SaveSegmentForm,
    SegmentFormNameChanged(String),
    SegmentFormCidrChanged(String),
    SegmentFormRoleChanged(String),
    SegmentFormColorChanged(String),
    DeleteSegment(Uuid),
    // Rules
    AddRuleClicked,
    CancelRuleForm,
    SaveRuleForm,
    RuleFormNameChanged(String),
    RuleFormSourceChanged(String),
    RuleFormDestinationChanged(String),
    RuleFormProtocolChanged(Protocol),
    RuleFormPortChanged(String),
    RuleFormActionChanged(Action),
    RuleFormPriorityChanged(String),
    DeleteRule(Uuid),
    // Topology canvas
    CanvasPressed(Position),
    CanvasMoved {
        position: Position,
        canvas: CanvasSize,
    },
    CanvasReleased,
    // Export
    ExportFormatChanged(ExportFormat),
    ExportClicked,
    ExportResult(ExportFormat, Result<Option<String>, String>),
    ConfigSaved(Result<(), String>),
    // Banners
    PruneBanners,
    DismissBanner(usize),
    EventOccurred(iced::Event),
}

impl State {
    pub fn new(options: LaunchOptions) -> (Self, Task<Message>) {
        let store = NetworkStore::load_boxed(options.storage());
        let export_format = options.config.export_format;

        let mut state = Self {
            store,
            theme: crate::theme::AppTheme::default(),
            active_tab: Tab::Dashboard,
            segment_form: None,
            rule_form: None,
            form_errors: None,
            drag: DragState::Idle,
            export_format,
            cached_preview: String::new(),
            banners: Vec::new(),
            config_dir: options.config_dir(),
            log_level: options.config.log_level,
        };
        state.update_cached_preview();
        (state, Task::none())
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub(crate) fn update_cached_preview(&mut self) {
        self.cached_preview = export::preview(
            self.store.segments(),
            self.store.rules(),
            self.export_format,
            chrono::Utc::now(),
        );
    }

    pub fn push_banner(
        &mut self,
        message: impl Into<String>,
        severity: BannerSeverity,
        duration_secs: u64,
    ) {
        let message = message.into();
        // Replace an identical banner instead of stacking duplicates
        self.banners
            .retain(|b| !(b.message == message && b.severity == severity));
        self.banners.push(Banner {
            message,
            severity,
            expires_at: Instant::now() + Duration::from_secs(duration_secs),
        });
        if self.banners.len() > MAX_BANNERS {
            let excess = self.banners.len() - MAX_BANNERS;
            self.banners.drain(..excess);
        }
    }

    pub fn prune_expired_banners(&mut self) {
        self.prune_banners_at(Instant::now());
    }

    pub(crate) fn prune_banners_at(&mut self, now: Instant) {
        self.banners.retain(|b| b.expires_at > now);
    }

    /// Persists user preferences in the background
    pub(crate) fn save_config(&self) -> Task<Message> {
        let Some(dir) = self.config_dir.clone() else {
            return Task::none();
        };
        let config = AppConfig {
            export_format: self.export_format,
            log_level: self.log_level.clone(),
        };
        Task::perform(
            async move {
                netsketch::config::save_config(dir, config)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::ConfigSaved,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabChanged(tab) => handlers::handle_tab_changed(self, tab),
            Message::AddSegmentClicked => handlers::handle_add_segment_clicked(self),
            Message::EditSegmentClicked(id) => handlers::handle_edit_segment_clicked(self, id),
            Message::CancelSegmentForm => handlers::handle_cancel_segment_form(self),
            Message::SaveSegmentForm => handlers::handle_save_segment_form(self),
            Message::SegmentFormNameChanged(s) => {
                if let Some(f) = &mut self.segment_form {
                    f.name = s;
                }
            }
            Message::SegmentFormCidrChanged(s) => {
                if let Some(f) = &mut self.segment_form {
                    f.cidr = s;
                }
            }
            Message::SegmentFormRoleChanged(s) => {
                if let Some(f) = &mut self.segment_form {
                    f.role = s;
                }
            }
            Message::SegmentFormColorChanged(s) => {
                if let Some(f) = &mut self.segment_form {
                    f.color = s;
                }
            }
            Message::DeleteSegment(id) => handlers::handle_delete_segment(self, id),
            Message::AddRuleClicked => handlers::handle_add_rule_clicked(self),
            Message::CancelRuleForm => handlers::handle_cancel_rule_form(self),
            Message::SaveRuleForm => handlers::handle_save_rule_form(self),
            Message::RuleFormNameChanged(s) => {
                if let Some(f) = &mut self.rule_form {
                    f.name = s;
                }
            }
            Message::RuleFormSourceChanged(s) => {
                if let Some(f) = &mut self.rule_form {
                    f.source = s;
                }
            }
            Message::RuleFormDestinationChanged(s) => {
                if let Some(f) = &mut self.rule_form {
                    f.destination = s;
                }
            }
            Message::RuleFormProtocolChanged(p) => {
                if let Some(f) = &mut self.rule_form {
                    f.protocol = p;
                }
            }
            Message::RuleFormPortChanged(s) => {
                if let Some(f) = &mut self.rule_form {
                    f.port = s;
                }
            }
            Message::RuleFormActionChanged(a) => {
                if let Some(f) = &mut self.rule_form {
                    f.action = a;
                }
            }
            Message::RuleFormPriorityChanged(s) => {
                if let Some(f) = &mut self.rule_form {
                    f.priority = s;
                }
            }
            Message::DeleteRule(id) => handlers::handle_delete_rule(self, id),
            Message::CanvasPressed(position) => handlers::handle_canvas_pressed(self, position),
            Message::CanvasMoved { position, canvas } => {
                handlers::handle_canvas_moved(self, position, canvas);
            }
            Message::CanvasReleased => handlers::handle_canvas_released(self),
            Message::ExportFormatChanged(format) => {
                return handlers::handle_export_format_changed(self, format);
            }
            Message::ExportClicked => return handlers::handle_export_clicked(self),
            Message::ExportResult(format, result) => {
                handlers::handle_export_result(self, format, result);
            }
            Message::ConfigSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save configuration: {e}");
                }
            }
            Message::PruneBanners => handlers::handle_prune_banners(self),
            Message::DismissBanner(index) => handlers::handle_dismiss_banner(self, index),
            Message::EventOccurred(event) => return self.handle_event(&event),
        }
        Task::none()
    }

    fn handle_event(&mut self, event: &iced::Event) -> Task<Message> {
        if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event {
            match key.as_ref() {
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Enter) => {
                    if self.segment_form.is_some() {
                        return Task::done(Message::SaveSegmentForm);
                    }
                    if self.rule_form.is_some() {
                        return Task::done(Message::SaveRuleForm);
                    }
                }
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) => {
                    if self.segment_form.is_some() {
                        return Task::done(Message::CancelSegmentForm);
                    }
                    if self.rule_form.is_some() {
                        return Task::done(Message::CancelRuleForm);
                    }
                }
                _ => {}
            }
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::Subscription::batch(vec![
            iced::event::listen().map(Message::EventOccurred),
            if self.banners.is_empty() {
                iced::Subscription::none()
            } else {
                iced::time::every(Duration::from_millis(250)).map(|_| Message::PruneBanners)
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;

    #[test]
    fn test_banner_expires_after_three_seconds() {
        let mut state = create_test_state();
        state.push_banner("Segment deleted", BannerSeverity::Success, BANNER_SECS);
        let created = Instant::now();

        state.prune_banners_at(created + Duration::from_secs(2));
        assert_eq!(state.banners.len(), 1);

        state.prune_banners_at(created + Duration::from_secs(4));
        assert!(state.banners.is_empty());
    }

    #[test]
    fn test_duplicate_banner_replaced() {
        let mut state = create_test_state();
        state.push_banner("Rule deleted", BannerSeverity::Success, BANNER_SECS);
        state.push_banner("Rule deleted", BannerSeverity::Success, BANNER_SECS);
        assert_eq!(state.banners.len(), 1);
    }

    #[test]
    fn test_banner_cap() {
        let mut state = create_test_state();
        for i in 0..10 {
            state.push_banner(format!("msg {i}"), BannerSeverity::Error, BANNER_SECS);
        }
        assert_eq!(state.banners.len(), MAX_BANNERS);
        assert_eq!(state.banners.last().unwrap().message, "msg 9");
    }

    #[test]
    fn test_ephemeral_state_starts_empty() {
        let state = create_test_state();
        assert!(state.store.is_empty());
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(state.config_dir.is_none());
        assert!(state.cached_preview.contains("\"segments\": []"));
    }
}
