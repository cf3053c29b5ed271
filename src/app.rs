//! App state and core application logic
//!
//! Manages the screen state machine, navigation stack, the detail-page
//! loading lifecycle, and keyboard handling. Network work happens in
//! spawned tasks; this module only issues requests and applies outcomes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::CatalogClient;
use crate::embed::embed_url;
use crate::models::{other_videos, Comment, Video};

/// Fixed user-facing message for any failed fetch sequence
pub const LOAD_ERROR: &str = "Failed to load videos";

// =============================================================================
// Screens
// =============================================================================

/// Which screen is currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Home listing of the catalog
    #[default]
    Home,
    /// Detail view for one video
    Detail,
}

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (comment box focused)
    Editing,
}

// =============================================================================
// List cursor
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListCursor {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update length, clamping the selection to the valid range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Page state (detail screen)
// =============================================================================

/// Everything the detail screen needs once its fetch sequence resolves
#[derive(Debug, Clone)]
pub struct PageData {
    pub current: Video,
    pub others: Vec<Video>,
    pub comments: Vec<Comment>,
}

impl PageData {
    /// Build page data from the three fetch results, deriving the rail by
    /// excluding the current video from the catalog.
    pub fn assemble(current: Video, catalog: Vec<Video>, comments: Vec<Comment>) -> Self {
        let others = other_videos(catalog, &current.id);
        Self {
            current,
            others,
            comments,
        }
    }
}

/// Detail-page state machine: exactly one variant at a time.
#[derive(Debug, Clone)]
pub enum PageState {
    /// Fetch sequence in flight
    Loading,
    /// Any of the three fetches failed
    Error(String),
    /// All fetches resolved
    Ready(PageData),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageState::Error(_))
    }

    pub fn data(&self) -> Option<&PageData> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

// =============================================================================
// Comment composer
// =============================================================================

/// Text input state for the comment box
#[derive(Debug, Clone, Default)]
pub struct Composer {
    pub text: String,
    pub cursor: usize,
}

impl Composer {
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the composed text, leaving the composer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

// =============================================================================
// Per-screen state
// =============================================================================

/// Home screen state: the catalog listing
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub videos: Vec<Video>,
    pub list: ListCursor,
    pub loading: bool,
    pub error: Option<String>,
    /// Generation of the catalog fetch this screen is waiting for
    pub generation: u64,
}

impl HomeState {
    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.list.set_len(videos.len());
        self.videos = videos;
        self.loading = false;
        self.error = None;
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.videos.get(self.list.selected)
    }
}

/// Detail screen state for one video identifier
#[derive(Debug, Clone)]
pub struct DetailPage {
    /// The identifier this page was opened for
    pub video_id: String,
    /// Generation of the fetch sequence this page is waiting for
    pub generation: u64,
    pub page: PageState,
    /// Rail selection (other videos)
    pub rail: ListCursor,
    pub composer: Composer,
    pub liked: bool,
    pub following: bool,
}

impl DetailPage {
    /// A fresh page in the loading state
    pub fn loading(video_id: impl Into<String>, generation: u64) -> Self {
        Self {
            video_id: video_id.into(),
            generation,
            page: PageState::Loading,
            rail: ListCursor::default(),
            composer: Composer::default(),
            liked: false,
            following: false,
        }
    }
}

// =============================================================================
// Fetch plumbing
// =============================================================================

/// Work the main loop should spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Catalog { generation: u64 },
    Page { id: String, generation: u64 },
}

/// Completed work delivered back over the channel
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Catalog {
        generation: u64,
        result: Result<Vec<Video>, String>,
    },
    Page {
        generation: u64,
        result: Result<PageData, String>,
    },
}

/// Run the detail-page fetch sequence: target video, full catalog, comments.
/// The first failure wins and collapses to the fixed user-facing message.
pub async fn load_page(client: &CatalogClient, id: &str) -> Result<PageData, String> {
    let current = client
        .video_by_id(id)
        .await
        .map_err(|_| LOAD_ERROR.to_string())?;
    let catalog = client.videos().await.map_err(|_| LOAD_ERROR.to_string())?;
    let comments = client.comments(id).await.map_err(|_| LOAD_ERROR.to_string())?;
    Ok(PageData::assemble(current, catalog, comments))
}

/// Fetch the catalog for the home screen
pub async fn load_catalog(client: &CatalogClient) -> Result<Vec<Video>, String> {
    client.videos().await.map_err(|_| LOAD_ERROR.to_string())
}

// =============================================================================
// Main application state
// =============================================================================

#[derive(Debug, Default)]
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Navigation history stack
    pub nav_stack: Vec<Screen>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Transient message shown in a popup (player errors etc.)
    pub notice: Option<String>,

    pub home: HomeState,
    pub detail: Option<DetailPage>,

    /// Embeddable URL the main loop should hand to the local player
    player_request: Option<String>,
    /// Fetch work the main loop should spawn
    pending: Vec<FetchRequest>,
    /// Monotonic counter; outcomes from older generations are dropped
    generation: u64,
}

impl App {
    /// Create the app on the home screen with the initial catalog fetch queued
    pub fn new() -> Self {
        let mut app = Self {
            running: true,
            ..Self::default()
        };
        app.request_catalog();
        app
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Queue a (re)fetch of the home catalog
    pub fn request_catalog(&mut self) {
        let generation = self.next_generation();
        self.home.loading = true;
        self.home.error = None;
        self.home.generation = generation;
        self.pending.push(FetchRequest::Catalog { generation });
    }

    /// Navigate to a video's detail screen and start its fetch sequence.
    /// Opening a new id while one is in flight supersedes the old sequence.
    pub fn open_video(&mut self, id: impl Into<String>) {
        let id = id.into();
        let generation = self.next_generation();
        self.detail = Some(DetailPage::loading(id.clone(), generation));
        self.navigate(Screen::Detail);
        self.pending.push(FetchRequest::Page { id, generation });
    }

    /// Drain queued fetch requests for the main loop to spawn
    pub fn take_requests(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Drain a queued player hand-off
    pub fn take_player_request(&mut self) -> Option<String> {
        self.player_request.take()
    }

    /// Apply a completed fetch. Outcomes from superseded generations are
    /// dropped so a stale response can never overwrite current state.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Catalog { generation, result } => {
                if generation != self.home.generation {
                    return;
                }
                match result {
                    Ok(videos) => self.home.set_videos(videos),
                    Err(msg) => {
                        self.home.loading = false;
                        self.home.error = Some(msg);
                    }
                }
            }
            FetchOutcome::Page { generation, result } => {
                let Some(detail) = self.detail.as_mut() else {
                    return;
                };
                if generation != detail.generation {
                    return;
                }
                match result {
                    Ok(data) => {
                        detail.rail.set_len(data.others.len());
                        detail.page = PageState::Ready(data);
                    }
                    Err(msg) => detail.page = PageState::Error(msg),
                }
            }
        }
    }

    /// Append a comment to the current page without refetching anything
    pub fn add_comment(&mut self, text: impl Into<String>) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        if let PageState::Ready(data) = &mut detail.page {
            data.comments.push(Comment::local(&detail.video_id, text));
        }
    }

    /// Navigate to a new screen, pushing the current one onto the stack
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            self.nav_stack.push(self.screen.clone());
            self.screen = screen;
        }
        self.input_mode = InputMode::Normal;
    }

    /// Go back to the previous screen
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(prev) = self.nav_stack.pop() {
            if prev == Screen::Home {
                // Leaving the detail view discards its page state
                self.detail = None;
            }
            self.screen = prev;
            true
        } else {
            false
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any keypress dismisses a transient notice
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (comment input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        let Some(detail) = self.detail.as_mut() else {
            self.input_mode = InputMode::Normal;
            return false;
        };

        match key.code {
            KeyCode::Esc => {
                detail.composer.clear();
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Enter => {
                let text = detail.composer.take();
                self.add_comment(text);
                self.input_mode = InputMode::Normal;
                true
            }
            KeyCode::Char(c) => {
                detail.composer.insert(c);
                true
            }
            KeyCode::Backspace => {
                detail.composer.backspace();
                true
            }
            KeyCode::Left => {
                detail.composer.cursor_left();
                true
            }
            KeyCode::Right => {
                detail.composer.cursor_right();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Esc => {
                return self.back();
            }
            _ => {}
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.list.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.list.down();
                true
            }
            KeyCode::Home => {
                self.home.list.first();
                true
            }
            KeyCode::End => {
                self.home.list.last();
                true
            }
            KeyCode::Enter => {
                if let Some(video) = self.home.selected_video() {
                    let id = video.id.clone();
                    self.open_video(id);
                }
                true
            }
            KeyCode::Char('r') => {
                self.request_catalog();
                true
            }
            _ => false,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        let Some(detail) = self.detail.as_mut() else {
            return false;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                detail.rail.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                detail.rail.down();
                true
            }
            KeyCode::Enter => {
                // Open the selected rail video: the identifier changes and
                // the fetch sequence restarts
                let next = detail
                    .page
                    .data()
                    .and_then(|d| d.others.get(detail.rail.selected))
                    .map(|v| v.id.clone());
                if let Some(id) = next {
                    self.open_video(id);
                }
                true
            }
            KeyCode::Char('p') => {
                if let Some(data) = detail.page.data() {
                    self.player_request = Some(embed_url(&data.current.video_link));
                }
                true
            }
            KeyCode::Char('l') => {
                detail.liked = !detail.liked;
                true
            }
            KeyCode::Char('f') => {
                detail.following = !detail.following;
                true
            }
            KeyCode::Char('c') => {
                if detail.page.data().is_some() {
                    self.input_mode = InputMode::Editing;
                }
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
