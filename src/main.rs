mod app;
mod event;
mod keyboard;
mod session;
mod settings;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, Screen};
use event::{AppEvent, EventHandler};
use session::input::KeyPress;
use settings::{Category, Language, Settings};
use ui::components::answer_card::AnswerCard;
use ui::components::keyboard_panel::KeyboardPanel;
use ui::components::prompt_card::PromptCard;
use ui::components::settings_form::{self, SettingsForm};
use ui::components::star_overlay::StarOverlay;
use ui::layout::LessonLayout;

#[derive(Parser)]
#[command(name = "keysprout", version, about = "Terminal keyboard practice for young learners")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Alphabet language")]
    language: Option<Language>,

    #[arg(short, long, value_enum, help = "What to practice")]
    category: Option<Category>,

    #[arg(long, help = "Check answers with Enter instead of auto-submit")]
    require_enter: bool,

    #[arg(long, help = "Seed for deterministic target draws")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let theme_name = cli.theme.as_deref().unwrap_or("sunny-sky");
    let theme = ui::theme::Theme::load(theme_name).unwrap_or_default();
    let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));

    let mut settings = Settings::default();
    if let Some(language) = cli.language {
        settings.language = language;
    }
    if let Some(category) = cli.category {
        settings.category = category;
    }
    if cli.require_enter {
        settings.require_enter = true;
    }

    let mut app = App::new(theme, settings, cli.seed);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key, Instant::now()),
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Repeat and Release events never count as input
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::Menu => handle_menu_key(app, key),
        Screen::Lesson => handle_lesson_key(app, key, now),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Right | KeyCode::Char('l') => app.menu_cycle_forward(),
        KeyCode::Left | KeyCode::Char('h') => app.menu_cycle_backward(),
        KeyCode::Enter => {
            if app.menu_selected == settings_form::ROW_START {
                app.start_lesson();
            } else {
                app.menu_cycle_forward();
            }
        }
        _ => {}
    }
}

fn handle_lesson_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Reserved exit shortcut, checked before any other interpretation
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Esc {
        app.exit_lesson();
        return;
    }

    match key.code {
        // The exit action (the original screen's exit button)
        KeyCode::Esc => app.exit_lesson(),
        KeyCode::Tab => app.keyboard_focused = !app.keyboard_focused,
        KeyCode::Up if app.keyboard_focused => app.keyboard.move_up(),
        KeyCode::Down if app.keyboard_focused => app.keyboard.move_down(),
        KeyCode::Left if app.keyboard_focused => app.keyboard.move_left(),
        KeyCode::Right if app.keyboard_focused => app.keyboard.move_right(),
        KeyCode::Enter if app.keyboard_focused => app.press_on_screen_key(now),
        KeyCode::Char(' ') if app.keyboard_focused => app.press_on_screen_key(now),
        KeyCode::Backspace => app.lesson_key(KeyPress::Backspace, false, now),
        KeyCode::Enter => app.lesson_key(KeyPress::Enter, false, now),
        KeyCode::Char(ch) => {
            let shift = key.modifiers.contains(KeyModifiers::SHIFT);
            app.lesson_key(KeyPress::Char(ch), shift, now);
        }
        // Anything else is silently ignored
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        Screen::Menu => render_menu(frame, app),
        Screen::Lesson => render_lesson(frame, app),
    }
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let menu_area = ui::layout::centered_rect(70, 90, area);
    let form = SettingsForm::new(
        &app.settings,
        app.menu_selected,
        app.settings_error.as_ref(),
        app.theme,
    );
    frame.render_widget(form, menu_area);
}

fn render_lesson(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let Some(ref lesson) = app.lesson else {
        return;
    };

    let layout = LessonLayout::new(area);

    let header_text = format!(
        " keysprout | {} | {} | {} ",
        app.settings.category.label(),
        app.settings.learning_mode.label(),
        app.settings.language.label(),
    );
    let header = Paragraph::new(Line::from(Span::styled(
        header_text,
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let prompt_area = pad_card(layout.prompt);
    let answer_area = pad_card(layout.answer);

    let prompt = PromptCard::new(
        &lesson.target,
        lesson.requires_shift(&app.settings),
        app.theme,
    );
    frame.render_widget(prompt, prompt_area);

    let answer = AnswerCard::new(
        &lesson.pending_input,
        lesson.feedback,
        app.settings.require_enter,
        app.theme,
    );
    frame.render_widget(answer, answer_area);

    if let Some(keyboard_area) = layout.keyboard {
        let panel = KeyboardPanel::new(
            &app.keyboard,
            app.settings.learning_mode,
            app.keyboard_focused,
            app.theme,
        );
        frame.render_widget(panel, keyboard_area);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " Type on your keyboard to answer  [Tab] On-screen keys  [Esc] Back ",
        Style::default().fg(colors.hint()),
    )));
    frame.render_widget(footer, layout.footer);

    // Stars render last, over everything
    let stars = StarOverlay::new(&lesson.stars, app.theme);
    frame.render_widget(stars, area);
}

/// Inset the card areas slightly so they read as cards, not panes.
fn pad_card(area: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(horizontal[1]);
    vertical[1]
}
