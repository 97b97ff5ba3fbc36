//! Quest log: active list, completed list and detail panel
//!
//! The log mirrors the lifecycle source into two ordered lists and keeps a
//! single detail panel bound to the selected quest. A quest is in at most one
//! list at a time, and the detail binding never outlives the quest it shows:
//! completing or canceling the bound quest hides the panel in the same step.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use super::palette::CategoryPalette;
use super::registry::{QuestViewRegistry, ViewFactory};
use crate::config::QuestLogOptions;
use crate::error::{QuestUiError, Result};
use crate::quest::events::require_quest;
use crate::quest::{LifecycleChannel, Quest, QuestLifecycleSource, SubscriptionSet};
use crate::session::SessionControl;

const VIEW_NAME: &str = "quest log";

/// Panel showing the full information of one quest
pub trait DetailPanel {
    fn show(&mut self, quest: &Quest);
    fn hide(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestLogTab {
    Active,
    Completed,
}

impl QuestLogTab {
    pub fn next(self) -> Self {
        match self {
            QuestLogTab::Active => QuestLogTab::Completed,
            QuestLogTab::Completed => QuestLogTab::Active,
        }
    }
}

/// Player input routed to the quest log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestLogInput {
    /// Open or close the log
    Toggle,
    Escape,
    SwitchTab(QuestLogTab),
    /// Select the entry at `index` in the current tab
    Select(usize),
}

struct LogState<F: ViewFactory, D: DetailPanel> {
    active: QuestViewRegistry<F>,
    completed: QuestViewRegistry<F>,
    detail: D,
    /// Quest bound to the detail panel
    selected: Option<Quest>,
    tab: QuestLogTab,
    open: bool,
    options: QuestLogOptions,
}

impl<F: ViewFactory, D: DetailPanel> LogState<F, D> {
    fn list(&self, tab: QuestLogTab) -> &QuestViewRegistry<F> {
        match tab {
            QuestLogTab::Active => &self.active,
            QuestLogTab::Completed => &self.completed,
        }
    }

    fn on_registered(&mut self, quest: &Quest) {
        if self.completed.unregister(Some(quest)) {
            log::warn!("{}: '{}' registered again after completion", VIEW_NAME, quest.code_name);
        }
        self.active.register(Some(quest));
    }

    fn on_completed(&mut self, quest: &Quest) {
        self.active.unregister(Some(quest));
        self.completed.register(Some(quest));
        self.release_detail_for(quest);
    }

    fn on_canceled(&mut self, quest: &Quest) {
        self.active.unregister(Some(quest));
        self.release_detail_for(quest);
    }

    fn release_detail_for(&mut self, quest: &Quest) {
        if self.selected.as_ref().is_some_and(|s| s.same_quest(quest)) {
            self.clear_detail();
        }
    }

    fn clear_detail(&mut self) {
        self.selected = None;
        self.detail.hide();
    }

    /// Empty both lists and refill them from the snapshots.
    ///
    /// A bound quest that left the active list in between counts as
    /// completed or canceled and loses its detail binding, as does one
    /// that is in neither snapshot.
    fn rebuild(&mut self, active: &[Quest], completed: &[Quest]) {
        let was_active = self
            .selected
            .as_ref()
            .is_some_and(|s| self.active.contains(&s.code_name));

        self.active.clear_all();
        self.completed.clear_all();
        self.populate(active, completed);

        let stale = self.selected.as_ref().is_some_and(|s| {
            let now_active = self.active.contains(&s.code_name);
            (was_active && !now_active) || (!now_active && !self.completed.contains(&s.code_name))
        });
        if stale {
            self.clear_detail();
        }
    }

    fn populate(&mut self, active: &[Quest], completed: &[Quest]) {
        for quest in active {
            self.active.register(Some(quest));
        }
        for quest in completed {
            if self.active.contains(&quest.code_name) {
                log::warn!(
                    "{}: '{}' reported both active and completed, keeping it active",
                    VIEW_NAME,
                    quest.code_name
                );
                continue;
            }
            self.completed.register(Some(quest));
        }
    }

    /// Bind the detail panel. A closed log shows it when it opens.
    fn select(&mut self, quest: &Quest) {
        self.selected = Some(quest.clone());
        if self.open {
            self.detail.show(quest);
        }
    }

    fn open(&mut self, session: &mut dyn SessionControl) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        if self.options.pause_on_open {
            session.suspend_time();
        }
        if self.options.show_cursor_on_open {
            session.set_cursor_visible(true);
        }
        // The binding survives close/open, no need to ask the source again
        if let Some(quest) = &self.selected {
            self.detail.show(quest);
        }
        true
    }

    fn close(&mut self, session: &mut dyn SessionControl) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        if self.selected.is_some() {
            self.detail.hide();
        }
        if self.options.pause_on_open {
            session.resume_time();
        }
        if self.options.show_cursor_on_open {
            session.set_cursor_visible(false);
        }
        true
    }
}

pub struct QuestLogBuilder<F: ViewFactory, D: DetailPanel> {
    active_factory: Option<F>,
    completed_factory: Option<F>,
    detail: Option<D>,
    palette: CategoryPalette,
    options: QuestLogOptions,
}

impl<F: ViewFactory + 'static, D: DetailPanel + 'static> QuestLogBuilder<F, D> {
    /// Factory for entries of the active list
    pub fn active_factory(mut self, factory: F) -> Self {
        self.active_factory = Some(factory);
        self
    }

    /// Factory for entries of the completed list
    pub fn completed_factory(mut self, factory: F) -> Self {
        self.completed_factory = Some(factory);
        self
    }

    pub fn detail_panel(mut self, detail: D) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn palette(mut self, palette: CategoryPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn options(mut self, options: QuestLogOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<QuestLog<F, D>> {
        let (Some(active), Some(completed)) = (self.active_factory, self.completed_factory) else {
            log::error!("{}: list entry factory missing, quest log disabled", VIEW_NAME);
            return Err(QuestUiError::MissingFactory { view: VIEW_NAME });
        };
        let Some(detail) = self.detail else {
            log::error!("{}: detail panel missing, quest log disabled", VIEW_NAME);
            return Err(QuestUiError::MissingFactory { view: "quest detail panel" });
        };

        let state = LogState {
            active: QuestViewRegistry::new("active quest list", active, self.palette.clone()),
            completed: QuestViewRegistry::new("completed quest list", completed, self.palette),
            detail,
            selected: None,
            tab: QuestLogTab::Active,
            open: false,
            options: self.options,
        };

        Ok(QuestLog {
            state: Rc::new(RefCell::new(state)),
            subscriptions: SubscriptionSet::new(),
        })
    }
}

/// Quest log window kept in sync with a lifecycle source
pub struct QuestLog<F: ViewFactory, D: DetailPanel> {
    state: Rc<RefCell<LogState<F, D>>>,
    subscriptions: SubscriptionSet,
}

impl<F: ViewFactory + 'static, D: DetailPanel + 'static> QuestLog<F, D> {
    pub fn builder() -> QuestLogBuilder<F, D> {
        QuestLogBuilder {
            active_factory: None,
            completed_factory: None,
            detail: None,
            palette: CategoryPalette::default(),
            options: QuestLogOptions::default(),
        }
    }

    /// Subscribe to `source` and rebuild both lists from its snapshots.
    ///
    /// Fails while the log is still attached to another source.
    pub fn attach(&mut self, source: &mut dyn QuestLifecycleSource) -> Result<()> {
        if self.subscriptions.is_bound_elsewhere(source) {
            log::error!("{}: still attached to another quest source", VIEW_NAME);
            return Err(QuestUiError::AttachedElsewhere { view: VIEW_NAME });
        }
        if !self.subscriptions.is_empty() {
            log::debug!("{}: re-attaching, dropping previous subscriptions", VIEW_NAME);
            self.subscriptions.revoke(source);
        }

        for channel in LifecycleChannel::ALL {
            let state = Rc::downgrade(&self.state);
            let token = source.subscribe(
                channel,
                Box::new(move |quest: Option<&Quest>| on_lifecycle(&state, channel, quest)),
            );
            self.subscriptions.push(token);
        }

        let active = source.active_quests();
        let completed = source.completed_quests();
        let mut state = self.state.borrow_mut();
        state.rebuild(&active, &completed);
        log::info!(
            "{}: attached with {} active and {} completed quests",
            VIEW_NAME,
            state.active.len(),
            state.completed.len()
        );
        Ok(())
    }

    /// Stop receiving notifications. A log dropped without detaching is
    /// released by the source on its next notification.
    pub fn detach(&mut self, source: &mut dyn QuestLifecycleSource) {
        let revoked = self.subscriptions.revoke(source);
        log::debug!("{}: detached ({} subscriptions revoked)", VIEW_NAME, revoked);
    }

    /// Detach, empty both lists and unbind the detail panel
    pub fn shutdown(&mut self, source: &mut dyn QuestLifecycleSource) {
        self.detach(source);
        let mut state = self.state.borrow_mut();
        state.active.clear_all();
        state.completed.clear_all();
        state.clear_detail();
    }

    /// Rebuild both lists from the source's snapshots
    pub fn force_refresh(&mut self, source: &dyn QuestLifecycleSource) {
        let active = source.active_quests();
        let completed = source.completed_quests();

        self.state.borrow_mut().rebuild(&active, &completed);
    }

    /// Entry toggle callback. Selecting binds and shows the detail panel;
    /// deselecting is handled by tab changes.
    pub fn selection_changed(&mut self, is_selected: bool, quest: Option<&Quest>) {
        let Some(quest) = quest else {
            log::warn!("{}: selection changed without a quest", VIEW_NAME);
            return;
        };
        if is_selected {
            self.state.borrow_mut().select(quest);
        }
    }

    /// Switching tabs always hides the detail panel
    pub fn on_tab_changed(&mut self, tab: QuestLogTab) {
        let mut state = self.state.borrow_mut();
        state.tab = tab;
        state.clear_detail();
    }

    pub fn open(&mut self, session: &mut dyn SessionControl) -> bool {
        self.state.borrow_mut().open(session)
    }

    pub fn close(&mut self, session: &mut dyn SessionControl) -> bool {
        self.state.borrow_mut().close(session)
    }

    pub fn toggle(&mut self, session: &mut dyn SessionControl) {
        let mut state = self.state.borrow_mut();
        if state.open {
            state.close(session);
        } else {
            state.open(session);
        }
    }

    /// Close the log if it is open. Returns true when the key was consumed.
    pub fn handle_escape(&mut self, session: &mut dyn SessionControl) -> bool {
        let mut state = self.state.borrow_mut();
        state.open && state.options.escape_closes && state.close(session)
    }

    /// Returns true when the input was consumed by the log
    pub fn handle_input(&mut self, input: QuestLogInput, session: &mut dyn SessionControl) -> bool {
        match input {
            QuestLogInput::Toggle => {
                self.toggle(session);
                true
            }
            QuestLogInput::Escape => self.handle_escape(session),
            QuestLogInput::SwitchTab(tab) => {
                if !self.is_open() {
                    return false;
                }
                self.on_tab_changed(tab);
                true
            }
            QuestLogInput::Select(index) => {
                if !self.is_open() {
                    return false;
                }
                let quest = {
                    let state = self.state.borrow();
                    state.list(state.tab).quests().get(index).cloned()
                };
                match quest {
                    Some(quest) => {
                        self.selection_changed(true, Some(&quest));
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn tab(&self) -> QuestLogTab {
        self.state.borrow().tab
    }

    /// Quest currently bound to the detail panel
    pub fn selected(&self) -> Option<Quest> {
        self.state.borrow().selected.clone()
    }

    pub fn is_detail_visible(&self) -> bool {
        let state = self.state.borrow();
        state.open && state.selected.is_some()
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn active_list(&self) -> Ref<'_, QuestViewRegistry<F>> {
        Ref::map(self.state.borrow(), |s| &s.active)
    }

    pub fn completed_list(&self) -> Ref<'_, QuestViewRegistry<F>> {
        Ref::map(self.state.borrow(), |s| &s.completed)
    }

    /// Entries of the tab currently shown
    pub fn current_list(&self) -> Ref<'_, QuestViewRegistry<F>> {
        Ref::map(self.state.borrow(), |s| s.list(s.tab))
    }

    pub fn detail(&self) -> Ref<'_, D> {
        Ref::map(self.state.borrow(), |s| &s.detail)
    }
}

fn on_lifecycle<F: ViewFactory, D: DetailPanel>(
    state: &Weak<RefCell<LogState<F, D>>>,
    channel: LifecycleChannel,
    quest: Option<&Quest>,
) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    let Some(quest) = require_quest(channel, VIEW_NAME, quest) else {
        return true;
    };

    let mut state = state.borrow_mut();
    match channel {
        LifecycleChannel::Registered => state.on_registered(quest),
        LifecycleChannel::Completed => state.on_completed(quest),
        LifecycleChannel::Canceled => state.on_canceled(quest),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestJournal;
    use crate::session::GameSession;
    use crate::ui::registry::tests::{quest, RecordingFactory};

    #[derive(Default)]
    struct RecordingDetail {
        shown: Option<String>,
        show_calls: usize,
    }

    impl DetailPanel for RecordingDetail {
        fn show(&mut self, quest: &Quest) {
            self.shown = Some(quest.code_name.clone());
            self.show_calls += 1;
        }

        fn hide(&mut self) {
            self.shown = None;
        }
    }

    type TestLog = QuestLog<RecordingFactory, RecordingDetail>;

    fn quest_log() -> TestLog {
        QuestLog::builder()
            .active_factory(RecordingFactory::default())
            .completed_factory(RecordingFactory::default())
            .detail_panel(RecordingDetail::default())
            .build()
            .unwrap()
    }

    fn active(log: &TestLog) -> Vec<String> {
        log.active_list().keys().map(String::from).collect()
    }

    fn completed(log: &TestLog) -> Vec<String> {
        log.completed_list().keys().map(String::from).collect()
    }

    fn assert_disjoint(log: &TestLog) {
        let done = completed(log);
        for code in active(log) {
            assert!(!done.contains(&code), "{} is in both lists", code);
        }
    }

    fn attached_log(journal: &mut QuestJournal) -> TestLog {
        let mut log = quest_log();
        log.attach(journal).unwrap();
        log
    }

    #[test]
    fn test_missing_parts_are_config_errors() {
        let missing_factory = QuestLog::<RecordingFactory, RecordingDetail>::builder()
            .active_factory(RecordingFactory::default())
            .detail_panel(RecordingDetail::default())
            .build();
        assert!(matches!(missing_factory, Err(QuestUiError::MissingFactory { view: "quest log" })));

        let missing_detail = QuestLog::<RecordingFactory, RecordingDetail>::builder()
            .active_factory(RecordingFactory::default())
            .completed_factory(RecordingFactory::default())
            .build();
        assert!(matches!(missing_detail, Err(QuestUiError::MissingFactory { .. })));
    }

    #[test]
    fn test_attach_populates_both_lists() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        journal.start_quest(quest("Q0"));
        journal.complete_quest("Q0");

        let log = attached_log(&mut journal);

        assert_eq!(active(&log), vec!["Q1", "Q2"]);
        assert_eq!(completed(&log), vec!["Q0"]);
    }

    #[test]
    fn test_lifecycle_moves_entries_between_lists() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        let log = attached_log(&mut journal);

        journal.complete_quest("Q1");
        assert_eq!(active(&log), vec!["Q2"]);
        assert_eq!(completed(&log), vec!["Q1"]);
        assert_disjoint(&log);

        journal.start_quest(quest("Q3"));
        journal.cancel_quest("Q2");
        assert_eq!(active(&log), vec!["Q3"]);
        // Canceled quests never enter the completed list
        assert_eq!(completed(&log), vec!["Q1"]);
        assert_disjoint(&log);
    }

    #[test]
    fn test_reregistered_completed_quest_leaves_completed_list() {
        let mut journal = QuestJournal::new();
        let log = attached_log(&mut journal);
        let q1 = quest("Q1");

        journal.notify(LifecycleChannel::Registered, Some(&q1));
        journal.notify(LifecycleChannel::Completed, Some(&q1));
        journal.notify(LifecycleChannel::Registered, Some(&q1));

        assert_eq!(active(&log), vec!["Q1"]);
        assert!(completed(&log).is_empty());
    }

    #[test]
    fn test_completing_bound_quest_hides_detail() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        let mut log = attached_log(&mut journal);
        let mut session = GameSession::new();
        log.open(&mut session);

        log.selection_changed(true, Some(&quest("Q1")));
        assert_eq!(log.detail().shown.as_deref(), Some("Q1"));
        assert!(log.is_detail_visible());

        journal.complete_quest("Q2");
        assert_eq!(log.selected(), Some(quest("Q1")));

        journal.complete_quest("Q1");
        assert_eq!(log.selected(), None);
        assert_eq!(log.detail().shown, None);
        assert!(!log.is_detail_visible());
    }

    #[test]
    fn test_canceling_bound_quest_hides_detail() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        let mut log = attached_log(&mut journal);

        log.selection_changed(true, Some(&quest("Q1")));
        journal.cancel_quest("Q1");

        assert_eq!(log.selected(), None);
        assert_eq!(log.detail().shown, None);
    }

    #[test]
    fn test_tab_change_hides_detail() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q2"));
        let mut log = attached_log(&mut journal);

        log.selection_changed(true, Some(&quest("Q2")));
        log.on_tab_changed(QuestLogTab::Completed);

        assert_eq!(log.tab(), QuestLogTab::Completed);
        assert_eq!(log.selected(), None);
        assert_eq!(log.detail().shown, None);
        // Q2 itself is still active
        assert_eq!(active(&log), vec!["Q2"]);
    }

    #[test]
    fn test_deselect_and_missing_quest_do_nothing() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        let mut log = attached_log(&mut journal);

        log.selection_changed(false, Some(&quest("Q1")));
        log.selection_changed(true, None);

        assert_eq!(log.selected(), None);
        assert_eq!(log.detail().show_calls, 0);
    }

    #[test]
    fn test_cancel_of_unknown_quest_changes_nothing() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        let mut log = attached_log(&mut journal);
        log.selection_changed(true, Some(&quest("Q1")));

        journal.notify(LifecycleChannel::Canceled, Some(&quest("Q3")));
        for channel in LifecycleChannel::ALL {
            journal.notify(channel, None);
        }

        assert_eq!(active(&log), vec!["Q1"]);
        assert!(completed(&log).is_empty());
        assert_eq!(log.selected(), Some(quest("Q1")));
    }

    #[test]
    fn test_open_close_drive_session() {
        let mut log = quest_log();
        let mut session = GameSession::new();

        assert!(log.open(&mut session));
        assert!(!log.open(&mut session));
        assert_eq!(session.time_scale(), 0.0);
        assert!(session.cursor_visible());

        assert!(log.close(&mut session));
        assert!(!log.close(&mut session));
        assert_eq!(session.time_scale(), 1.0);
        assert!(!session.cursor_visible());

        log.toggle(&mut session);
        assert!(log.is_open());
        log.toggle(&mut session);
        assert!(!log.is_open());
    }

    #[test]
    fn test_open_without_pause() {
        let mut log = QuestLog::builder()
            .active_factory(RecordingFactory::default())
            .completed_factory(RecordingFactory::default())
            .detail_panel(RecordingDetail::default())
            .options(QuestLogOptions {
                pause_on_open: false,
                show_cursor_on_open: true,
                escape_closes: false,
            })
            .build()
            .unwrap();
        let mut session = GameSession::new();

        log.open(&mut session);
        assert_eq!(session.time_scale(), 1.0);
        assert!(session.cursor_visible());

        assert!(!log.handle_escape(&mut session));
        assert!(log.is_open());
    }

    #[test]
    fn test_reopen_reshows_bound_detail() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        let mut log = attached_log(&mut journal);
        let mut session = GameSession::new();

        log.open(&mut session);
        log.selection_changed(true, Some(&quest("Q1")));
        log.close(&mut session);
        assert_eq!(log.detail().shown, None);
        assert_eq!(log.selected(), Some(quest("Q1")));

        log.open(&mut session);
        assert_eq!(log.detail().shown.as_deref(), Some("Q1"));
        assert_eq!(log.detail().show_calls, 2);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let mut log = quest_log();
        let mut session = GameSession::new();

        assert!(!log.handle_escape(&mut session));

        log.open(&mut session);
        assert!(log.handle_escape(&mut session));
        assert!(!log.is_open());
        assert_eq!(session.time_scale(), 1.0);
    }

    #[test]
    fn test_handle_input_selects_from_current_tab() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        journal.start_quest(quest("Q0"));
        journal.complete_quest("Q0");
        let mut log = attached_log(&mut journal);
        let mut session = GameSession::new();

        // Ignored while closed
        assert!(!log.handle_input(QuestLogInput::Select(0), &mut session));

        assert!(log.handle_input(QuestLogInput::Toggle, &mut session));
        assert!(log.handle_input(QuestLogInput::Select(1), &mut session));
        assert_eq!(log.selected(), Some(quest("Q2")));

        assert!(log.handle_input(QuestLogInput::SwitchTab(QuestLogTab::Completed), &mut session));
        assert_eq!(log.selected(), None);
        assert!(log.handle_input(QuestLogInput::Select(0), &mut session));
        assert_eq!(log.selected(), Some(quest("Q0")));
        assert!(!log.handle_input(QuestLogInput::Select(5), &mut session));

        assert!(log.handle_input(QuestLogInput::Escape, &mut session));
        assert!(!log.is_open());
    }

    #[test]
    fn test_force_refresh_drops_stale_binding() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        let mut log = attached_log(&mut journal);
        log.selection_changed(true, Some(&quest("Q1")));

        log.detach(&mut journal);
        journal.cancel_quest("Q1");
        journal.complete_quest("Q2");
        assert_eq!(active(&log), vec!["Q1", "Q2"]);

        log.force_refresh(&journal);
        assert!(active(&log).is_empty());
        assert_eq!(completed(&log), vec!["Q2"]);
        assert_eq!(log.selected(), None);
    }

    #[test]
    fn test_reattach_and_shutdown() {
        let mut journal = QuestJournal::new();
        let mut log = quest_log();
        log.attach(&mut journal).unwrap();
        log.attach(&mut journal).unwrap();
        for channel in LifecycleChannel::ALL {
            assert_eq!(journal.subscriber_count(channel), 1);
        }

        journal.start_quest(quest("Q1"));
        log.selection_changed(true, Some(&quest("Q1")));
        log.shutdown(&mut journal);

        assert!(!log.is_attached());
        assert!(active(&log).is_empty());
        assert_eq!(log.selected(), None);
        for channel in LifecycleChannel::ALL {
            assert_eq!(journal.subscriber_count(channel), 0);
        }
    }

    #[test]
    fn test_reattach_moves_quests_finished_while_detached() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q2"));
        let mut log = attached_log(&mut journal);
        let mut session = GameSession::new();
        log.open(&mut session);
        log.selection_changed(true, Some(&quest("Q1")));

        log.detach(&mut journal);
        journal.complete_quest("Q1");
        journal.cancel_quest("Q2");
        log.attach(&mut journal).unwrap();

        assert!(active(&log).is_empty());
        assert_eq!(completed(&log), vec!["Q1"]);
        assert_disjoint(&log);
        assert_eq!(log.selected(), None);
        assert_eq!(log.detail().shown, None);
    }

    #[test]
    fn test_reattach_keeps_binding_of_unchanged_quest() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        journal.start_quest(quest("Q0"));
        journal.complete_quest("Q0");
        let mut log = attached_log(&mut journal);

        log.selection_changed(true, Some(&quest("Q0")));
        log.attach(&mut journal).unwrap();
        assert_eq!(log.selected(), Some(quest("Q0")));

        log.selection_changed(true, Some(&quest("Q1")));
        log.attach(&mut journal).unwrap();
        assert_eq!(log.selected(), Some(quest("Q1")));
    }

    #[test]
    fn test_attach_to_second_source_requires_detach() {
        let mut first = QuestJournal::new();
        let mut second = QuestJournal::new();
        let mut log = attached_log(&mut first);

        assert!(matches!(
            log.attach(&mut second),
            Err(QuestUiError::AttachedElsewhere { view: "quest log" })
        ));
        for channel in LifecycleChannel::ALL {
            assert_eq!(first.subscriber_count(channel), 1);
            assert_eq!(second.subscriber_count(channel), 0);
        }

        log.detach(&mut first);
        log.attach(&mut second).unwrap();
        first.start_quest(quest("A1"));
        second.start_quest(quest("B1"));
        assert_eq!(active(&log), vec!["B1"]);
    }

    #[test]
    fn test_selection_while_closed_waits_for_open() {
        let mut journal = QuestJournal::new();
        journal.start_quest(quest("Q1"));
        let mut log = attached_log(&mut journal);
        let mut session = GameSession::new();

        log.selection_changed(true, Some(&quest("Q1")));
        assert_eq!(log.selected(), Some(quest("Q1")));
        assert_eq!(log.detail().shown, None);
        assert_eq!(log.detail().show_calls, 0);

        log.open(&mut session);
        assert!(log.is_detail_visible());
        assert_eq!(log.detail().shown.as_deref(), Some("Q1"));
        assert_eq!(log.detail().show_calls, 1);
    }

    #[test]
    fn test_dropped_log_is_released_by_source() {
        let mut journal = QuestJournal::new();
        drop(attached_log(&mut journal));

        for channel in LifecycleChannel::ALL {
            journal.notify(channel, None);
            assert_eq!(journal.subscriber_count(channel), 0);
        }
    }
}
