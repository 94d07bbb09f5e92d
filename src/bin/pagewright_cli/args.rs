//! Command-line surface for `pagewright-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pagewright::application::editor::Direction;
use pagewright::config::ConfigOverrides;
use pagewright::domain::blocks::BlockType;
use pagewright_api_types::{PageStatus, PostStatus, UserRole};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "pagewright-cli", version, about = "Pagewright content administration CLI", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigOverrides,

    /// Account email used to sign in.
    #[arg(long, env = "PAGEWRIGHT_EMAIL", global = true)]
    pub email: Option<String>,

    /// Path to a file containing the account password (takes precedence over env).
    #[arg(long, env = "PAGEWRIGHT_PASSWORD_FILE", global = true)]
    pub password_file: Option<PathBuf>,

    /// Password from env (no CLI flag to keep it out of shell history).
    #[arg(hide = true, long = "password-env-only", env = "PAGEWRIGHT_PASSWORD")]
    pub password_env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Page management
    Pages(PagesArgs),
    /// Post management
    Posts(PostsArgs),
    /// Category management
    Categories(CategoriesArgs),
    /// Navigation menus
    Menus(MenusArgs),
    /// User accounts
    Users(UsersArgs),
    /// Uploaded media files
    Media(MediaArgs),
    /// Site-wide settings
    Settings(SettingsArgs),
    /// Store a file or remote image
    Upload(UploadArgs),
    /// Content counts
    Dashboard,
    /// The signed-in account
    Profile(ProfileArgs),
    /// Edit the content blocks of a page or post
    Blocks(BlocksArgs),
    /// Public site settings and menus as a theme sees them (no sign-in)
    Site,
}

impl Commands {
    /// Whether the command needs a signed-in session.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Commands::Site)
    }
}

#[derive(Parser, Debug)]
pub struct PagesArgs {
    #[command(subcommand)]
    pub action: PagesCmd,
}

#[derive(Subcommand, Debug)]
pub enum PagesCmd {
    /// List pages with optional filters
    List {
        #[arg(long)]
        status: Option<PageStatusArg>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a page by id
    Get { id: Uuid },
    /// Create a page; the slug is derived from the title when omitted
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value_t = PageStatusArg::Draft)]
        status: PageStatusArg,
        /// JSON array of blocks to start from
        #[arg(long)]
        blocks_file: Option<PathBuf>,
    },
    /// Update title, slug or status, keeping the blocks
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        status: Option<PageStatusArg>,
    },
    /// Delete a page
    Delete { id: Uuid },
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List posts, optionally by status
    List {
        #[arg(long)]
        status: Option<PostStatusArg>,
    },
    /// Get a post by id
    Get { id: Uuid },
    /// Create a post; the slug is derived from the title when omitted
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value = "")]
        excerpt: String,
        #[arg(long, default_value = "")]
        featured_image: String,
        #[arg(long, default_value_t = PostStatusArg::Draft)]
        status: PostStatusArg,
        /// Category id; repeat for several
        #[arg(long = "category")]
        categories: Vec<Uuid>,
    },
    /// Update post fields, keeping the blocks
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        featured_image: Option<String>,
        #[arg(long)]
        status: Option<PostStatusArg>,
        /// Add or remove a category; repeat for several
        #[arg(long = "toggle-category")]
        toggle_categories: Vec<Uuid>,
    },
    /// Delete a post
    Delete { id: Uuid },
}

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoriesCmd,
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCmd {
    List,
    Get {
        id: Uuid,
    },
    /// Create a category; the slug is derived from the name when omitted
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct MenusArgs {
    #[command(subcommand)]
    pub action: MenusCmd,
}

#[derive(Subcommand, Debug)]
pub enum MenusCmd {
    List,
    Get {
        id: Uuid,
    },
    /// Fetch a menu from the public endpoint
    Public {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Append an item to a menu
    AddItem {
        id: Uuid,
        #[arg(long)]
        label: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "_self")]
        target: String,
    },
    /// Remove the item at a zero-based index
    RemoveItem {
        id: Uuid,
        index: usize,
    },
    /// Swap an item with its neighbour
    MoveItem {
        id: Uuid,
        index: usize,
        direction: Direction,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersCmd,
}

#[derive(Subcommand, Debug)]
pub enum UsersCmd {
    List,
    Get {
        id: Uuid,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = UserRoleArg::Editor)]
        role: UserRoleArg,
        /// File holding the new account's password
        #[arg(long)]
        new_password_file: PathBuf,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<UserRoleArg>,
        /// File holding a replacement password
        #[arg(long)]
        new_password_file: Option<PathBuf>,
    },
    Delete {
        id: Uuid,
    },
}

#[derive(Parser, Debug)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub action: MediaCmd,
}

#[derive(Subcommand, Debug)]
pub enum MediaCmd {
    /// List uploaded files
    List {
        /// Only files with an image content type
        #[arg(long, default_value_t = false)]
        images: bool,
    },
    /// Get one file by name
    Get { name: String },
}

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    Get,
    /// Set one field: site_name, logo, favicon, contact_email, header_menu_id, footer_menu_id
    Set { field: String, value: String },
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    #[command(subcommand)]
    pub action: UploadCmd,
}

#[derive(Subcommand, Debug)]
pub enum UploadCmd {
    /// Upload a local file
    File { path: PathBuf },
    /// Have the server fetch a remote URL
    Url { url: String },
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCmd {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        /// File holding the new password
        #[arg(long)]
        new_password_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct BlockTarget {
    /// Edit the blocks of this page
    #[arg(long)]
    pub page: Option<Uuid>,
    /// Edit the blocks of this post
    #[arg(long)]
    pub post: Option<Uuid>,
}

#[derive(Parser, Debug)]
pub struct BlocksArgs {
    #[command(flatten)]
    pub target: BlockTarget,

    #[command(subcommand)]
    pub action: BlocksCmd,
}

#[derive(Subcommand, Debug)]
pub enum BlocksCmd {
    /// One line per block: index, id, type
    List,
    /// The editable fields of one block
    Show { index: usize },
    /// Append a block with default content
    Add { block_type: BlockType },
    /// Set a field, e.g. `title` or `items.0.title`
    Set {
        index: usize,
        field: String,
        value: String,
    },
    /// Swap a block with its neighbour
    Move { index: usize, direction: Direction },
    /// Remove a block
    Remove { index: usize },
    /// Append an empty item to a list, e.g. `plans` or `plans.0.features`
    AddItem { index: usize, list: String },
    /// Remove a list item, e.g. `items.2`
    RemoveItem { index: usize, item: String },
    /// Fill an image field from a local file or a remote URL
    Image {
        index: usize,
        field: String,
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        file: Option<PathBuf>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Render the editor as HTML
    Preview {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PageStatusArg {
    Draft,
    Published,
    Archived,
}

impl PageStatusArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        PageStatus::from(self).as_str()
    }
}

impl From<PageStatusArg> for PageStatus {
    fn from(value: PageStatusArg) -> Self {
        match value {
            PageStatusArg::Draft => PageStatus::Draft,
            PageStatusArg::Published => PageStatus::Published,
            PageStatusArg::Archived => PageStatus::Archived,
        }
    }
}

impl fmt::Display for PageStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PostStatusArg {
    Draft,
    Published,
    Archived,
}

impl PostStatusArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        PostStatus::from(self).as_str()
    }
}

impl From<PostStatusArg> for PostStatus {
    fn from(value: PostStatusArg) -> Self {
        match value {
            PostStatusArg::Draft => PostStatus::Draft,
            PostStatusArg::Published => PostStatus::Published,
            PostStatusArg::Archived => PostStatus::Archived,
        }
    }
}

impl fmt::Display for PostStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UserRoleArg {
    Admin,
    Editor,
}

impl From<UserRoleArg> for UserRole {
    fn from(value: UserRoleArg) -> Self {
        match value {
            UserRoleArg::Admin => UserRole::Admin,
            UserRoleArg::Editor => UserRole::Editor,
        }
    }
}

impl fmt::Display for UserRoleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(UserRole::from(*self).as_str())
    }
}
