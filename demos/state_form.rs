//! # State Form Demo
//!
//! Two custom selects standing in for hidden form controls:
//! - Wrapping each select's messages in a parent message with its slot index
//! - Tab / Shift+Tab focus cycling with `FocusRing`
//! - Mouse clicks on labels and list items
//! - Reading the hidden controls back as form values on submit
//! - Logging to `state_form.log` through `ProgramOptions::log_file`
//!
//! Run with: `cargo run --example state_form`

use pickbox::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use pickbox::ratatui::layout::{Alignment, Constraint, Layout, Rect};
use pickbox::ratatui::style::{Color, Modifier, Style};
use pickbox::ratatui::text::{Line, Span};
use pickbox::ratatui::widgets::{Block, Borders, Paragraph};
use pickbox::ratatui::Frame;
use pickbox::select::{self, FocusRing, FormSelect, Select};
use pickbox::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};

const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OR", "Oregon"),
    ("TX", "Texas"),
    ("WA", "Washington"),
];

const SHIPPING: &[(&str, &str)] = &[
    ("ground", "Ground"),
    ("express", "Express"),
    ("overnight", "Overnight"),
];

/// The hidden controls the form starts from.
fn controls() -> Vec<FormSelect> {
    let mut state = FormSelect::new("state");
    for &(value, label) in STATES {
        state = if value == "CA" {
            state.with_selected_option(value, label)
        } else {
            state.with_option(value, label)
        };
    }

    let mut shipping = FormSelect::new("shipping");
    for &(value, label) in SHIPPING {
        shipping = shipping.with_option(value, label);
    }

    vec![state, shipping]
}

struct StateForm {
    fields: Vec<Select>,
    ring: FocusRing,
    status: String,
}

#[derive(Debug)]
enum Msg {
    Event(TerminalEvent),
    Field(usize, select::Message),
}

impl StateForm {
    /// Lift a field's command into the form's message space.
    fn field(&mut self, index: usize, msg: select::Message) -> Command<Msg> {
        match self.fields.get_mut(index) {
            Some(field) => field.update(msg).map(move |m| Msg::Field(index, m)),
            None => Command::none(),
        }
    }

    fn move_focus(&mut self, forward: bool) -> Command<Msg> {
        let moved = if forward {
            self.ring.next()
        } else {
            self.ring.prev()
        };
        let Some(moved) = moved else {
            return Command::none();
        };
        Command::batch([
            self.field(moved.from, select::Message::Blur),
            self.field(moved.to, select::Message::Focus),
        ])
    }

    fn submit(&mut self) {
        let pairs: Vec<String> = self
            .fields
            .iter()
            .filter_map(|f| f.native().form_value())
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        log::info!("submitted {}", pairs.join("&"));
        self.status = format!("Submitted: {}", pairs.join("&"));
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Msg> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Command::quit(),
            KeyCode::Char('s') if ctrl => {
                self.submit();
                Command::none()
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            _ => self.field(self.ring.focused(), select::Message::KeyPress(key)),
        }
    }

    /// Open lists overlap the fields below them, so an open select sees the
    /// click first and keeps it if the click landed inside.
    fn on_mouse(&mut self, mouse: MouseEvent) -> Command<Msg> {
        let mut order: Vec<usize> = (0..self.fields.len()).collect();
        order.sort_by_key(|&i| !self.fields[i].is_open());

        let mut cmds = Vec::new();
        for index in order {
            cmds.push(self.field(index, select::Message::Mouse(mouse)));
            if self.fields[index].is_focused() {
                if let Some(moved) = self.ring.focus(index) {
                    cmds.push(self.field(moved.from, select::Message::Blur));
                }
                break;
            }
        }
        Command::batch(cmds)
    }
}

impl Model for StateForm {
    type Message = Msg;
    type Flags = Vec<FormSelect>;

    fn init(controls: Vec<FormSelect>) -> (Self, Command<Msg>) {
        let titles = [" State ", " Shipping "];
        let mut fields: Vec<Select> = controls
            .into_iter()
            .zip(titles)
            .filter_map(|(native, title)| match Select::new(native) {
                Ok(select) => Some(select.with_title(title)),
                Err(err) => {
                    log::error!("skipping field: {err}");
                    None
                }
            })
            .collect();
        if let Some(first) = fields.first_mut() {
            first.focus();
        }

        let ring = FocusRing::new(fields.len());
        (
            StateForm {
                fields,
                ring,
                status: String::new(),
            },
            Command::set_title("pickbox: state form"),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Event(TerminalEvent::Key(key)) => self.on_key(key),
            Msg::Event(TerminalEvent::Mouse(mouse)) => self.on_mouse(mouse),
            Msg::Event(TerminalEvent::FocusLost) => {
                self.field(self.ring.focused(), select::Message::Blur)
            }
            Msg::Event(_) => Command::none(),
            Msg::Field(index, select::Message::Changed { value, .. }) => {
                self.status = format!("Changed field {index} to {value}");
                Command::none()
            }
            Msg::Field(index, m) => self.field(index, m),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, form_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Paragraph::new("Shipping Form")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        let slots: Vec<Rect> = (0..self.fields.len())
            .map(|i| Rect {
                y: form_area.y + 3 * i as u16,
                height: 3,
                width: form_area.width.min(40),
                ..form_area
            })
            .filter(|r| r.bottom() <= form_area.bottom())
            .collect();

        // Open lists draw over the fields below them, so they go last.
        let mut order: Vec<usize> = (0..slots.len()).collect();
        order.sort_by_key(|&i| self.fields[i].is_open());
        for i in order {
            self.fields[i].view(frame, slots[i]);
        }

        let status = Paragraph::new(self.status.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, status_area);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" open  "),
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(" choose  "),
            Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
            Span::raw(" submit  "),
            Span::styled("Ctrl+Q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| Some(Msg::Event(ev)))]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        log_file: Some("state_form.log".into()),
        ..Default::default()
    };
    let form = pickbox::run_with::<StateForm>(controls(), options).await?;
    for field in &form.fields {
        if let Some((name, value)) = field.native().form_value() {
            println!("{name}={value}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickbox::crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};
    use pickbox::testing::TestProgram;

    fn key(code: KeyCode) -> Msg {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Msg::Event(TerminalEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn click(column: u16, row: u16) -> Msg {
        Msg::Event(TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn form() -> TestProgram<StateForm> {
        TestProgram::new(controls())
    }

    #[test]
    fn starts_with_native_selection() {
        let prog = form();
        assert_eq!(prog.model().fields[0].selected_value(), "CA");
        assert_eq!(prog.model().fields[1].selected_value(), "ground");
        assert!(prog.model().fields[0].is_focused());
    }

    #[test]
    fn arrows_go_to_focused_field() {
        let mut prog = form();
        prog.send(key(KeyCode::Down));
        prog.drain_messages();
        assert_eq!(prog.model().fields[0].selected_value(), "CO");
        assert_eq!(prog.model().status, "Changed field 0 to CO");
    }

    #[test]
    fn tab_moves_focus_and_closes_previous() {
        let mut prog = form();
        prog.send(key(KeyCode::Char(' ')));
        assert!(prog.model().fields[0].is_open());

        prog.send(key(KeyCode::Tab));
        assert!(!prog.model().fields[0].is_open());
        assert!(!prog.model().fields[0].is_focused());
        assert!(prog.model().fields[1].is_focused());

        prog.send(key(KeyCode::Down));
        prog.drain_messages();
        assert_eq!(prog.model().fields[1].selected_value(), "express");
        assert_eq!(prog.model().fields[0].selected_value(), "CA");
    }

    #[test]
    fn typing_schedules_reset_timer() {
        let mut prog = form();
        prog.send(key(KeyCode::Char('t')));
        assert_eq!(prog.model().fields[0].selected_value(), "TX");
        assert_eq!(prog.scheduled_futures(), 1);
    }

    #[test]
    fn submit_reads_hidden_controls() {
        let mut prog = form();
        prog.send(key(KeyCode::Char('o')));
        prog.send(key_with(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(prog.model().status, "Submitted: state=OH&shipping=ground");
    }

    #[test]
    fn clicking_second_label_moves_focus() {
        let mut prog = form();
        prog.render(60, 20);
        // Second field's trigger starts on row 6.
        prog.send(click(2, 7));
        assert!(prog.model().fields[1].is_focused());
        assert!(prog.model().fields[1].is_open());
        assert!(!prog.model().fields[0].is_focused());
        assert_eq!(prog.model().ring.focused(), 1);
    }

    #[test]
    fn clicking_back_blurs_the_later_field() {
        let mut prog = form();
        prog.send(key(KeyCode::Tab));
        prog.send(key(KeyCode::Char(' ')));
        prog.render(60, 20);

        // First field's trigger spans rows 3..6; the open list of the second
        // field sits below row 9, so it does not cover it.
        prog.send(click(2, 4));
        assert!(prog.model().fields[0].is_focused());
        assert!(prog.model().fields[0].is_open());
        assert!(!prog.model().fields[1].is_focused());
        assert!(!prog.model().fields[1].is_open());
        assert_eq!(prog.model().ring.focused(), 0);
    }

    #[test]
    fn clicking_back_with_closed_list_moves_focus() {
        let mut prog = form();
        prog.send(key(KeyCode::Tab));
        prog.render(60, 20);

        prog.send(click(2, 4));
        assert!(prog.model().fields[0].is_focused());
        assert!(!prog.model().fields[1].is_focused());
        assert_eq!(prog.model().ring.focused(), 0);

        // Keys now reach the first field only.
        prog.send(key(KeyCode::Esc));
        prog.send(key(KeyCode::Down));
        assert_eq!(prog.model().fields[0].selected_value(), "CO");
        assert_eq!(prog.model().fields[1].selected_value(), "ground");
    }

    #[test]
    fn ctrl_q_quits() {
        let mut prog = form();
        prog.send(key_with(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(prog.quit_requested());
    }

    #[test]
    fn view_shows_both_fields() {
        let prog = form();
        let screen = prog.render_string(60, 20);
        assert!(screen.contains("California"));
        assert!(screen.contains("Ground"));
        assert!(screen.contains("Shipping Form"));
    }
}
