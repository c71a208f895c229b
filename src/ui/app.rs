use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{bio_paragraphs, Book};
use crate::store::{generate_cover_url, ShelfStore};

use super::forms::{BioEditor, BookField, BookForm, ConfirmBookDelete};
use super::helpers::{
    build_cover_lines, centered_rect, cover_pattern_for, repeat_pattern_row, surface_error,
};
use super::screens::BookDetailScreen;

/// Number of book cards shown in each row of the shelf grid. Three columns
/// keep the bracketed titles legible on common terminal widths.
const GRID_COLUMNS: usize = 3;
/// Height of one book card including its border.
const BOOK_CARD_HEIGHT: u16 = 9;
/// Rows reserved beneath the grid for the biography panel.
const BIO_PANEL_HEIGHT: u16 = 8;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// High-level navigation states. Keeping this explicit makes it easy to
/// reason about which rendering path runs and what keyboard shortcuts do.
enum Screen {
    Shelf,
    Detail(BookDetailScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    AddingBook(BookForm),
    EditingBook {
        id: String,
        cover_url: String,
        form: BookForm,
    },
    ConfirmDelete(ConfirmBookDelete),
    EditingBio(BioEditor),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    store: ShelfStore,
    books: Vec<Book>,
    bio: String,
    selected: usize,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: ShelfStore, books: Vec<Book>, bio: String) -> Self {
        Self {
            store,
            books,
            bio,
            selected: 0,
            screen: Screen::Shelf,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Dispatch one key press. Returns `true` when the application should
    /// exit. The current mode is temporarily swapped out so each handler can
    /// consume its state and decide what mode comes next.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingBook(form) => self.handle_add_book(code, form)?,
            Mode::EditingBook {
                id,
                cover_url,
                form,
            } => self.handle_edit_book(code, id, cover_url, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::EditingBio(editor) => self.handle_edit_bio(code, editor)?,
        };

        Ok(exit)
    }

    /// Ctrl+S is routed here from the event loop: in the biography editor it
    /// submits (Enter is taken by paragraph breaks); everywhere else it is
    /// ignored.
    pub(crate) fn handle_ctrl_s(&mut self) -> Result<()> {
        let mode = mem::replace(&mut self.mode, Mode::Normal);
        match mode {
            Mode::EditingBio(editor) => {
                if editor.text.trim().is_empty() {
                    self.set_status("Biography cannot be empty.", StatusKind::Error);
                    self.mode = Mode::EditingBio(editor);
                } else {
                    self.store.save_bio(&editor.text)?;
                    self.bio = self.store.load_bio()?;
                    self.set_status("Biography saved.", StatusKind::Info);
                }
            }
            other => self.mode = other,
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match &mut self.screen {
            Screen::Shelf => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        *exit = true;
                    }
                    KeyCode::Left => self.move_horizontal(-1),
                    KeyCode::Right => self.move_horizontal(1),
                    KeyCode::Up => self.move_vertical(-1),
                    KeyCode::Down => self.move_vertical(1),
                    KeyCode::Enter => {
                        if let Some(book) = self.current_book().cloned() {
                            self.clear_status();
                            self.screen = Screen::Detail(BookDetailScreen::new(book));
                        } else {
                            self.set_status("No book selected.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('o') | KeyCode::Char('O') => {
                        if let Some(book) = self.current_book().cloned() {
                            self.open_book_link(&book);
                        } else {
                            self.set_status("No book selected.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('b') | KeyCode::Char('B') => {
                        self.clear_status();
                        return Ok(Mode::EditingBio(BioEditor::from_text(&self.bio)));
                    }
                    KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.clear_status();
                        return Ok(Mode::AddingBook(BookForm::default()));
                    }
                    KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') => {
                        if let Some(book) = self.current_book().cloned() {
                            self.clear_status();
                            return Ok(Mode::ConfirmDelete(ConfirmBookDelete::from(book)));
                        } else {
                            self.set_status("No book selected to delete.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        if let Some(book) = self.current_book().cloned() {
                            self.clear_status();
                            return Ok(Mode::EditingBook {
                                id: book.id.clone(),
                                cover_url: book.cover_url.clone(),
                                form: BookForm::from_book(&book),
                            });
                        } else {
                            self.set_status("No book selected to edit.", StatusKind::Error);
                        }
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Screen::Detail(detail) => {
                let book = detail.book.clone();
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc => {
                        self.clear_status();
                        self.screen = Screen::Shelf;
                    }
                    KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => {
                        self.open_book_link(&book);
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        self.clear_status();
                        return Ok(Mode::EditingBook {
                            id: book.id.clone(),
                            cover_url: book.cover_url.clone(),
                            form: BookForm::from_book(&book),
                        });
                    }
                    KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Char('D') => {
                        self.clear_status();
                        return Ok(Mode::ConfirmDelete(ConfirmBookDelete::from(book)));
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_book(&form) {
                Ok(_) => keep_open = false,
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingBook(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_book(
        &mut self,
        code: KeyCode,
        id: String,
        cover_url: String,
        mut form: BookForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_existing_book(&id, &cover_url, &form) {
                Ok(_) => keep_open = false,
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingBook {
                id,
                cover_url,
                form,
            })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmBookDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.store.remove_book(&confirm.id)?;
                self.reload_books()?;
                self.set_status(format!("Deleted {}.", confirm.title), StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_edit_bio(&mut self, code: KeyCode, mut editor: BioEditor) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Biography edit cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => editor.newline(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Char(ch) => {
                editor.push_char(ch);
            }
            _ => {}
        }
        Ok(Mode::EditingBio(editor))
    }

    /// Validate the form, persist a brand new record, and re-load the shelf.
    /// The store assigns the id; the cover is generated here because record
    /// creation is the one moment a cover is chosen.
    fn save_new_book(&mut self, form: &BookForm) -> Result<()> {
        let (title, link, description) = form.parse_inputs()?;
        let stored = self.store.upsert_book(Book {
            id: String::new(),
            title,
            wattpad_url: link,
            description,
            cover_url: generate_cover_url(),
        })?;
        self.reload_books()?;

        if let Some(index) = self.books.iter().position(|b| b.id == stored.id) {
            self.selected = index;
        }
        self.set_status(format!("Added {}.", stored.title), StatusKind::Info);
        Ok(())
    }

    /// Validate the form and replace an existing record, keeping its id and
    /// its original cover.
    fn save_existing_book(&mut self, id: &str, cover_url: &str, form: &BookForm) -> Result<()> {
        let (title, link, description) = form.parse_inputs()?;
        let stored = self.store.upsert_book(Book {
            id: id.to_string(),
            title,
            wattpad_url: link,
            description,
            cover_url: cover_url.to_string(),
        })?;
        self.reload_books()?;
        self.set_status(format!("Updated {}.", stored.title), StatusKind::Info);
        Ok(())
    }

    /// Re-read the shelf from the store after a mutation, clamp the grid
    /// selection, and keep (or leave) the detail view in sync.
    fn reload_books(&mut self) -> Result<()> {
        self.books = self.store.load_books()?;

        if self.books.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.books.len() {
            self.selected = self.books.len() - 1;
        }

        if let Screen::Detail(detail) = &mut self.screen {
            if !detail.refresh(&self.books) {
                self.screen = Screen::Shelf;
            }
        }
        Ok(())
    }

    fn current_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    fn open_book_link(&mut self, book: &Book) {
        let link = book.wattpad_url.trim().to_string();
        if link.is_empty() {
            self.set_status("This book does not have a link yet.", StatusKind::Error);
        } else if let Err(err) = open_link(&link) {
            self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
        } else {
            self.set_status(format!("Opened {}.", book.title), StatusKind::Info);
        }
    }

    fn move_horizontal(&mut self, delta: isize) {
        if self.books.is_empty() {
            return;
        }
        let target = self.selected as isize + delta;
        if target >= 0 && (target as usize) < self.books.len() {
            self.selected = target as usize;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        if self.books.is_empty() {
            return;
        }
        let target = self.selected as isize + delta * GRID_COLUMNS as isize;
        if target >= 0 && (target as usize) < self.books.len() {
            self.selected = target as usize;
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Shelf => self.draw_shelf(frame, content_area),
            Screen::Detail(detail) => self.draw_detail(frame, content_area, detail),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, "Add Book", form),
            Mode::EditingBook { form, .. } => self.draw_book_form(frame, area, "Edit Book", form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::EditingBio(editor) => self.draw_bio_editor(frame, area, editor),
            Mode::Normal => {}
        }
    }

    fn draw_shelf(&self, frame: &mut Frame, area: Rect) {
        let bio_height = BIO_PANEL_HEIGHT.min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(bio_height)])
            .split(area);

        self.draw_book_grid(frame, chunks[0]);
        self.draw_bio_panel(frame, chunks[1]);
    }

    fn draw_book_grid(&self, frame: &mut Frame, area: Rect) {
        if self.books.is_empty() {
            let message = Paragraph::new("The shelf is empty. Press '+' to add a book.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }
        if area.height == 0 {
            return;
        }

        // Window whole card rows so the selected card is always on screen.
        let visible_rows = ((area.height / BOOK_CARD_HEIGHT).max(1)) as usize;
        let total_rows = (self.books.len() + GRID_COLUMNS - 1) / GRID_COLUMNS;
        let selected_row = self.selected / GRID_COLUMNS;

        let mut first_row = if selected_row >= visible_rows {
            selected_row + 1 - visible_rows
        } else {
            0
        };
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }
        let shown_rows = visible_rows.min(total_rows - first_row);

        let row_constraints: Vec<Constraint> = (0..shown_rows)
            .map(|_| Constraint::Length(BOOK_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        let column_constraints: Vec<Constraint> = (0..GRID_COLUMNS)
            .map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32))
            .collect();

        for (row_idx, row_chunk) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(column_constraints.clone())
                .split(*row_chunk);

            for (col_idx, column_chunk) in columns.iter().enumerate() {
                let book_index = (first_row + row_idx) * GRID_COLUMNS + col_idx;
                if let Some(book) = self.books.get(book_index) {
                    let selected = book_index == self.selected;
                    let mut block = Block::default().borders(Borders::ALL);
                    if selected {
                        block = block.style(Style::default().fg(Color::Yellow));
                    }
                    let inner_width = column_chunk.width.saturating_sub(2);
                    let inner_height = column_chunk.height.saturating_sub(2);
                    let lines = build_cover_lines(book, inner_width, inner_height, selected);
                    let card = Paragraph::new(lines)
                        .alignment(Alignment::Left)
                        .block(block);
                    frame.render_widget(card, *column_chunk);
                }
            }
        }
    }

    fn draw_bio_panel(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let mut lines = Vec::new();
        for (idx, paragraph) in bio_paragraphs(&self.bio).into_iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(paragraph));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No biography yet. Press 'b' to write one.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("About the Author"));
        frame.render_widget(panel, area);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &BookDetailScreen) {
        let book = &detail.book;
        let banner_height = 4u16.min(area.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(banner_height), Constraint::Min(0)])
            .split(area);

        // Banner: the woven cover texture with the title over it.
        let pattern = cover_pattern_for(&book.id);
        let width = chunks[0].width as usize;
        let mut banner_lines = Vec::new();
        for row_idx in 0..banner_height.saturating_sub(1) {
            let base = pattern[row_idx as usize % pattern.len()];
            banner_lines.push(Line::from(Span::styled(
                repeat_pattern_row(base, width),
                Style::default().fg(Color::DarkGray),
            )));
        }
        banner_lines.push(Line::from(Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(Paragraph::new(banner_lines), chunks[0]);

        let link_line = if book.has_link() {
            Line::from(Span::styled(
                book.wattpad_url.trim().to_string(),
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::from(Span::styled(
                "No reading link yet.",
                Style::default().fg(Color::DarkGray),
            ))
        };

        let description = if book.description.trim().is_empty() {
            "No description yet.".to_string()
        } else {
            book.description.trim().to_string()
        };

        let body = Paragraph::new(vec![
            link_line,
            Line::from(""),
            Line::from(description),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Details"));
        frame.render_widget(body, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        match (&self.screen, &self.mode) {
            (_, Mode::AddingBook(_)) | (_, Mode::EditingBook { .. }) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::ConfirmDelete(_)) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[N]", key_style),
                Span::raw(" / "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Keep"),
            ]),
            (_, Mode::EditingBio(_)) => Line::from(vec![
                Span::styled("[Ctrl+S]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" New line   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Detail(_), Mode::Normal) => Line::from(vec![
                Span::styled("[o]", key_style),
                Span::raw(" Read   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Shelf, Mode::Normal) => Line::from(vec![
                Span::styled("[\u{2190}\u{2192}\u{2191}\u{2193}]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Details   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[-]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[o]", key_style),
                Span::raw(" Read   "),
                Span::styled("[b]", key_style),
                Span::raw(" Bio   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &BookForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let title_line = form.build_line("Title", BookField::Title);
        let link_line = form.build_line("Link", BookField::Link);
        let description_line = form.build_line("Description", BookField::Description);

        let mut lines = vec![title_line, link_line, description_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save \u{2022} Tab to switch \u{2022} Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            BookField::Title => {
                let prefix = "Title: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(BookField::Title) as u16,
                    inner.y,
                )
            }
            BookField::Link => {
                let prefix = "Link: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(BookField::Link) as u16,
                    inner.y + 1,
                )
            }
            BookField::Description => {
                let prefix = "Description: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(BookField::Description) as u16,
                    inner.y + 2,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmBookDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete '{}'?", confirm.title)),
            Line::from("This removes it from your public shelf."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_bio_editor(&self, frame: &mut Frame, area: Rect, editor: &BioEditor) {
        let popup_area = centered_rect(70, 70, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Edit Biography")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        // Rendered without wrapping so the append cursor lines up with the
        // text exactly.
        let lines: Vec<Line> = editor.text.split('\n').map(Line::from).collect();
        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        let (row, col) = editor.cursor();
        if row < inner.height && col < inner.width {
            frame.set_cursor_position((inner.x + col, inner.y + row));
        }
    }
}
