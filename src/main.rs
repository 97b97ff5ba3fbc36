use macroquad::prelude::*;

use isometric_quest_ui::quest::{Quest, QuestCategory, QuestJournal, QuestLifecycleSource};
use isometric_quest_ui::render::quest::WidgetLog;
use isometric_quest_ui::render::{DetailPanelWidget, QuestUiRenderer, QuestWidgetFactory};
use isometric_quest_ui::ui::{CategoryPalette, QuestLogInput, QuestTracker};
use isometric_quest_ui::{GameSession, QuestLog, QuestUiConfig};

/// Quests handed out by the demo, in order
const DEMO_QUESTS: &[(&str, &str, QuestCategory)] = &[
    ("first_hunt", "First Hunt", QuestCategory::Main),
    ("slime_trouble", "Slime Trouble", QuestCategory::Side),
    ("elder_request", "The Elder's Request", QuestCategory::Side),
    ("daily_patrol", "Daily Patrol", QuestCategory::Daily),
    ("harvest_festival", "Harvest Festival", QuestCategory::Event),
    ("learn_to_walk", "Learning the Ropes", QuestCategory::Tutorial),
];

fn window_conf() -> Conf {
    Conf {
        window_title: "New Aeven - Quest UI".to_string(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize logging
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = QuestUiConfig::load_or_default();
    let palette = config.palette().unwrap_or_else(|e| {
        log::warn!("{}, using default quest colors", e);
        CategoryPalette::default()
    });

    let tracker = QuestTracker::builder()
        .factory(QuestWidgetFactory::new("tracker"))
        .palette(palette.clone())
        .build();
    let quest_log: isometric_quest_ui::Result<WidgetLog> = QuestLog::builder()
        .active_factory(QuestWidgetFactory::new("active quests"))
        .completed_factory(QuestWidgetFactory::new("completed quests"))
        .detail_panel(DetailPanelWidget::new())
        .palette(palette)
        .options(config.quest_log)
        .build();

    let (mut tracker, mut quest_log) = match (tracker, quest_log) {
        (Ok(tracker), Ok(quest_log)) => (tracker, quest_log),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Quest UI unavailable: {}", e);
            return;
        }
    };

    let mut journal = QuestJournal::new();
    let mut next_quest = 0;
    // Start with a couple of quests so the tracker has something to show
    while next_quest < 2 {
        let (code, name, category) = DEMO_QUESTS[next_quest];
        journal.start_quest(Quest::new(code, name, category));
        next_quest += 1;
    }

    if let Err(e) = tracker.attach(&mut journal).and_then(|_| quest_log.attach(&mut journal)) {
        log::error!("Quest UI unavailable: {}", e);
        return;
    }

    let mut session = GameSession::new();
    let renderer = QuestUiRenderer::new(config.tracker.max_visible);
    let mut play_time = 0.0f32;

    loop {
        play_time += get_frame_time() * session.time_scale();

        // Quest lifecycle (stand-in for server messages)
        if !session.is_game_over() && !session.is_paused() {
            if is_key_pressed(KeyCode::N) && next_quest < DEMO_QUESTS.len() {
                let (code, name, category) = DEMO_QUESTS[next_quest];
                journal.start_quest(Quest::new(code, name, category));
                next_quest += 1;
            }
            if is_key_pressed(KeyCode::C) {
                if let Some(quest) = journal.active_quests().first() {
                    journal.complete_quest(&quest.code_name);
                }
            }
            if is_key_pressed(KeyCode::X) {
                if let Some(quest) = journal.active_quests().first() {
                    journal.cancel_quest(&quest.code_name);
                }
            }
        }

        if is_key_pressed(KeyCode::F5) {
            tracker.force_refresh(&journal);
            quest_log.force_refresh(&journal);
            log::info!("Quest views refreshed");
        }

        // Session controls
        if is_key_pressed(KeyCode::P) {
            session.toggle_pause();
        }
        if is_key_pressed(KeyCode::G) {
            session.game_over();
        }
        if is_key_pressed(KeyCode::R) && session.is_game_over() {
            quest_log.close(&mut session);
            session.restart();
            play_time = 0.0;
        }

        // Quest log input
        if !session.is_game_over() {
            if is_key_pressed(KeyCode::Q) {
                quest_log.handle_input(QuestLogInput::Toggle, &mut session);
            }
            if is_key_pressed(KeyCode::Tab) {
                let tab = quest_log.tab().next();
                quest_log.handle_input(QuestLogInput::SwitchTab(tab), &mut session);
            }
            for (index, key) in DIGIT_KEYS.iter().enumerate() {
                if is_key_pressed(*key) {
                    quest_log.handle_input(QuestLogInput::Select(index), &mut session);
                }
            }
        }

        // Escape closes the quest log first, then falls through to the pause menu
        if is_key_pressed(KeyCode::Escape) && !quest_log.handle_escape(&mut session) {
            session.toggle_pause();
        }

        if is_key_pressed(KeyCode::F10) {
            break;
        }

        show_mouse(session.cursor_visible());

        clear_background(Color::from_rgba(30, 30, 40, 255));
        draw_text(
            &format!("Play time: {:.1}s", play_time),
            screen_width() - 180.0,
            20.0,
            16.0,
            GRAY,
        );
        draw_text(
            "[N] New  [C] Complete  [X] Cancel  [Q] Log  [P] Pause  [G] Game over  [F5] Refresh  [F10] Quit",
            10.0,
            screen_height() - 12.0,
            16.0,
            GRAY,
        );

        renderer.render_quest_tracker(&tracker.views());

        if quest_log.is_open() {
            let layout = renderer.render_quest_log(&quest_log);
            if is_mouse_button_pressed(MouseButton::Left) {
                let (mx, my) = mouse_position();
                if let Some(input) = layout.hit_test(mx, my) {
                    quest_log.handle_input(input, &mut session);
                }
            }
        }

        renderer.render_session_overlay(&session);

        next_frame().await;
    }

    tracker.shutdown(&mut journal);
    quest_log.shutdown(&mut journal);
}
