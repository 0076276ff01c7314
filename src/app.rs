// App state and main event loop.
// Wires pages, keyboard input, and the cache-then-GitHub notes pipeline.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::cache;
use crate::config::GitHubConfig;
use crate::error::{QuillError, Result};
use crate::github::GitHubClient;
use crate::state::{ComposeField, ComposeState, NotesState, Page, Toast};
use crate::token::TokenStore;
use crate::ui;

/// Main application state.
pub struct App {
    /// Currently visible page.
    pub page: Page,
    /// Repository configuration (single source of truth).
    pub config: GitHubConfig,
    /// Session-scoped bearer token.
    pub token: TokenStore,
    /// Token being typed on the home page.
    pub token_input: String,
    /// GitHub client, created once a token is available.
    pub client: Option<GitHubClient>,
    /// Loaded notes and list selection.
    pub notes: NotesState,
    /// Compose page fields.
    pub compose: ComposeState,
    /// Active toast banner, if any.
    pub toast: Option<Toast>,
    /// Location of the local snapshot.
    cache_path: Option<PathBuf>,
    /// Whether the app should exit.
    should_quit: bool,
}

impl App {
    pub fn new(config: GitHubConfig) -> Self {
        let token = TokenStore::from_env();
        let client = token.get().and_then(|t| GitHubClient::new(t).ok());
        Self {
            page: Page::default(),
            config,
            token,
            token_input: String::new(),
            client,
            notes: NotesState::new(),
            compose: ComposeState::new(),
            toast: None,
            cache_path: cache::notes_path(),
            should_quit: false,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            if self.toast.as_ref().is_some_and(Toast::is_expired) {
                self.toast = None;
            }
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events().await?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    async fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(std::time::Duration::from_millis(100))? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match self.page {
                    Page::Home => self.handle_home_key(key).await,
                    Page::Compose => self.handle_compose_key(key).await,
                    Page::Browse => self.handle_browse_key(key).await,
                    Page::Detail => self.handle_detail_key(key).await,
                }
            }
        }
        Ok(())
    }

    /// Make the given page the visible one.
    pub fn show_page(&mut self, page: Page) {
        self.page = page;
    }

    fn report_failure(&mut self, operation: &str, error: &QuillError) {
        self.toast = Some(Toast::failure(operation, error));
    }

    async fn handle_home_key(&mut self, key: KeyEvent) {
        if self.token.get().is_none() {
            // The home page doubles as the token prompt.
            match key.code {
                KeyCode::Char(c) => self.token_input.push(c),
                KeyCode::Backspace => {
                    self.token_input.pop();
                }
                KeyCode::Enter => self.submit_token(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') => self.show_page(Page::Compose),
            KeyCode::Char('b') => {
                self.show_page(Page::Browse);
                self.ensure_loaded().await;
            }
            KeyCode::Char('c') => {
                self.token.clear();
                self.client = None;
                self.toast = Some(Toast::success("Token cleared"));
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn submit_token(&mut self) {
        let token = std::mem::take(&mut self.token_input);
        if token.trim().is_empty() {
            return;
        }
        let token = token.trim().to_string();
        match GitHubClient::new(&token) {
            Ok(client) => {
                self.token.save(token);
                self.client = Some(client);
            }
            Err(e) => self.report_failure("保存令牌", &e),
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.notes.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.notes.select_next(),
            KeyCode::Enter => {
                if self.notes.selected_note().is_some() {
                    self.show_page(Page::Detail);
                }
            }
            KeyCode::Char('r') => self.load_notes(true).await,
            KeyCode::Esc => self.show_page(self.page.back()),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('d') => self.delete_selected().await,
            KeyCode::Esc => self.show_page(self.page.back()),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_compose_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save_note().await,
                KeyCode::Char('t') => self.compose.cycle_kind(),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Tab => self.compose.focus_next(),
            KeyCode::Char(c) => self.compose.insert_char(c),
            KeyCode::Backspace => self.compose.backspace(),
            KeyCode::Enter => {
                // Newlines only make sense in the content field.
                if self.compose.focus == ComposeField::Content {
                    self.compose.insert_char('\n');
                } else {
                    self.compose.focus_next();
                }
            }
            KeyCode::Esc => self.show_page(self.page.back()),
            _ => {}
        }
    }

    fn require_client(&mut self) -> Result<&mut GitHubClient> {
        if !self.config.is_complete() {
            return Err(QuillError::Other(
                "repository not configured; set owner and repo in config.json".to_string(),
            ));
        }
        if self.client.is_none() {
            let token = self.token.get().ok_or(QuillError::MissingToken)?.to_string();
            self.client = Some(GitHubClient::new(&token)?);
        }
        self.client.as_mut().ok_or(QuillError::MissingToken)
    }

    /// Load notes unless the browse page already has data.
    async fn ensure_loaded(&mut self) {
        if self.notes.notes().is_none() {
            self.load_notes(false).await;
        }
    }

    /// The load pipeline: cache first, GitHub on a miss, snapshot written
    /// back after a successful fetch. `force` skips and refreshes the cache.
    async fn load_notes(&mut self, force: bool) {
        if let Some(path) = self.cache_path.clone() {
            if force {
                // A stale snapshot must not survive a failed refresh.
                if let Err(e) = cache::invalidate(&path) {
                    self.report_failure("清除缓存", &e);
                }
            } else if let Some(notes) = cache::read_if_valid(&path, cache::NOTES_TTL) {
                self.notes.set_loaded(notes);
                return;
            }
        }

        self.notes.set_loading();
        let config = self.config.clone();
        let result = match self.require_client() {
            Ok(client) => client.fetch_notes(&config).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(file) => {
                self.write_snapshot(&file.notes);
                self.notes.set_loaded(file.notes);
            }
            Err(e) => {
                self.notes.set_error(e.to_string());
                self.report_failure("加载数据", &e);
            }
        }
    }

    /// Replace the local snapshot; a failed cache write is not fatal.
    fn write_snapshot(&mut self, notes: &[crate::github::Note]) {
        if let Some(path) = self.cache_path.clone() {
            if let Err(e) = cache::write_notes(&path, notes) {
                self.report_failure("写入缓存", &e);
            }
        }
    }

    /// Save the composed note: upload the attachment if any, then
    /// fetch-append-write the collection with a conditional update.
    async fn save_note(&mut self) {
        if !self.compose.is_submittable() {
            self.toast = Some(Toast::failure(
                "保存内容",
                &QuillError::Other("content is empty".to_string()),
            ));
            return;
        }

        let mut note = self.compose.build_note();

        // Upload the image first so its URL can be embedded in the content.
        let image_path = self.compose.image_path.trim().to_string();
        if !image_path.is_empty() {
            match self.upload_image(&image_path).await {
                Ok(url) => {
                    note.content.push_str(&format!("\n\n![image]({})", url));
                }
                Err(e) => {
                    self.report_failure("上传图片", &e);
                    return;
                }
            }
        }

        let config = self.config.clone();
        let result: Result<Vec<crate::github::Note>> = async {
            let client = self.require_client()?;
            // Re-read for a fresh sha so a concurrent edit turns into a
            // Conflict error instead of a silent lost update.
            let mut file = client.fetch_notes(&config).await?;
            file.notes.push(note);
            client
                .save_notes(&config, &file.notes, file.sha.as_deref())
                .await?;
            Ok(file.notes)
        }
        .await;

        match result {
            Ok(notes) => {
                self.write_snapshot(&notes);
                self.notes.set_loaded(notes);
                self.compose.clear();
                self.toast = Some(Toast::success("保存成功"));
                self.show_page(Page::Browse);
            }
            Err(e) => self.report_failure("保存内容", &e),
        }
    }

    async fn upload_image(&mut self, path: &str) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let filename = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| QuillError::Other(format!("bad image path: {}", path)))?
            .to_string();
        let config = self.config.clone();
        let client = self.require_client()?;
        client.upload_image(&config, &filename, &bytes).await
    }

    /// Delete the note shown on the detail page, using the same
    /// fetch-mutate-save shape as saving.
    async fn delete_selected(&mut self) {
        let Some(index) = self.notes.selected_original_index() else {
            return;
        };

        let config = self.config.clone();
        let result: Result<Vec<crate::github::Note>> = async {
            let client = self.require_client()?;
            let mut file = client.fetch_notes(&config).await?;
            if index >= file.notes.len() {
                return Err(QuillError::Other(
                    "note no longer exists on the remote".to_string(),
                ));
            }
            file.notes.remove(index);
            client
                .save_notes(&config, &file.notes, file.sha.as_deref())
                .await?;
            Ok(file.notes)
        }
        .await;

        match result {
            Ok(notes) => {
                self.write_snapshot(&notes);
                self.notes.set_loaded(notes);
                self.toast = Some(Toast::success("删除成功"));
                self.show_page(Page::Browse);
            }
            Err(e) => self.report_failure("删除内容", &e),
        }
    }
}
