/*
 * Responsibility
 * - コマンドライン引数の定義 (clap derive)
 * - 引数 → 各ページのフォーム入力への変換
 * - 値の検証はしない (ページ側のバリデーションに任せる)
 */
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::ui::pages::{
    PostFormInput, PostSearchInput, PostUpdateInput, UserDeleteInput, UserFormInput,
    UserSearchInput, UserUpdateInput,
};
use crate::ui::{ApiSection, SearchMode};

/// Terminal front end for the social network API.
#[derive(Parser, Debug)]
#[command(name = "social-client", version, about)]
pub struct Cli {
    /// API origin. Overrides SOCIAL_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the API answers
    Health,
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersCommand,
    },
    /// Manage posts
    Posts {
        #[command(subcommand)]
        action: PostsCommand,
    },
    /// Endpoint examples
    Docs {
        #[command(subcommand)]
        action: DocsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    Create(UserCreateArgs),
    /// Empty names list every user
    Search(UserSearchArgs),
    Update(UserUpdateArgs),
    Delete(UserDeleteArgs),
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    Create(PostCreateArgs),
    Search(PostSearchArgs),
    /// Only the title can be changed
    Update(PostUpdateArgs),
    List(PostListArgs),
}

#[derive(Subcommand, Debug)]
pub enum DocsCommand {
    Show {
        #[arg(long, value_enum, default_value_t = SectionArg::Users)]
        section: SectionArg,
    },
    /// Copy the snippet of a numbered button to the terminal clipboard
    Copy { button: usize },
}

#[derive(Args, Debug)]
pub struct UserCreateArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub second_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub age: String,
    /// male or female
    #[arg(long, default_value = "")]
    pub gender: String,
}

#[derive(Args, Debug)]
pub struct UserSearchArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub second_name: String,
}

#[derive(Args, Debug)]
pub struct UserUpdateArgs {
    #[arg(long, default_value = "")]
    pub id: String,
    /// Current password of the user
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub second_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub age: String,
    #[arg(long, default_value = "")]
    pub gender: String,
}

#[derive(Args, Debug)]
pub struct UserDeleteArgs {
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long, default_value = "")]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct PostCreateArgs {
    #[arg(long, default_value = "")]
    pub author_id: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub body: String,
}

#[derive(Args, Debug)]
pub struct PostSearchArgs {
    #[arg(long, conflicts_with = "title")]
    pub id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args, Debug)]
pub struct PostUpdateArgs {
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub body: String,
}

#[derive(Args, Debug)]
pub struct PostListArgs {
    /// Show only posts whose title or text contains this
    #[arg(long, default_value = "")]
    pub filter: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionArg {
    Users,
    Posts,
    Health,
}

impl From<SectionArg> for ApiSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Users => ApiSection::Users,
            SectionArg::Posts => ApiSection::Posts,
            SectionArg::Health => ApiSection::Health,
        }
    }
}

impl From<UserCreateArgs> for UserFormInput {
    fn from(a: UserCreateArgs) -> Self {
        Self {
            first_name: a.first_name,
            second_name: a.second_name,
            email: a.email,
            password: a.password,
            age: a.age,
            gender: a.gender,
        }
    }
}

impl From<UserSearchArgs> for UserSearchInput {
    fn from(a: UserSearchArgs) -> Self {
        Self {
            first_name: a.first_name,
            second_name: a.second_name,
        }
    }
}

impl From<UserUpdateArgs> for UserUpdateInput {
    fn from(a: UserUpdateArgs) -> Self {
        Self {
            id: a.id,
            password: a.password,
            first_name: a.first_name,
            second_name: a.second_name,
            email: a.email,
            age: a.age,
            gender: a.gender,
        }
    }
}

impl From<UserDeleteArgs> for UserDeleteInput {
    fn from(a: UserDeleteArgs) -> Self {
        Self {
            id: a.id,
            password: a.password,
        }
    }
}

impl From<PostCreateArgs> for PostFormInput {
    fn from(a: PostCreateArgs) -> Self {
        Self {
            author_id: a.author_id,
            title: a.title,
            body: a.body,
        }
    }
}

impl From<PostSearchArgs> for PostSearchInput {
    // `--title` alone selects the title mode, anything else searches by id.
    fn from(a: PostSearchArgs) -> Self {
        let mode = match (&a.id, &a.title) {
            (None, Some(_)) => SearchMode::Title,
            _ => SearchMode::Id,
        };
        Self {
            mode,
            id: a.id.unwrap_or_default(),
            title: a.title.unwrap_or_default(),
        }
    }
}

impl From<PostUpdateArgs> for PostUpdateInput {
    fn from(a: PostUpdateArgs) -> Self {
        Self {
            id: a.id,
            title: a.title,
            body: a.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "social-client",
            "users",
            "delete",
            "--id",
            "3",
            "--password",
            "password1",
            "--yes",
            "--base-url",
            "http://127.0.0.1:9000",
        ])
        .unwrap();

        assert!(cli.yes);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        let Command::Users {
            action: UsersCommand::Delete(args),
        } = cli.command
        else {
            panic!("expected users delete");
        };
        let input = UserDeleteInput::from(args);
        assert_eq!(input.id, "3");
    }

    #[test]
    fn title_flag_selects_title_search() {
        let cli =
            Cli::try_parse_from(["social-client", "posts", "search", "--title", "FastAPI"]).unwrap();
        let Command::Posts {
            action: PostsCommand::Search(args),
        } = cli.command
        else {
            panic!("expected posts search");
        };
        let input = PostSearchInput::from(args);
        assert_eq!(input.mode, SearchMode::Title);
        assert_eq!(input.title, "FastAPI");
    }

    #[test]
    fn missing_fields_reach_the_page_as_empty_strings() {
        let cli = Cli::try_parse_from(["social-client", "users", "create"]).unwrap();
        let Command::Users {
            action: UsersCommand::Create(args),
        } = cli.command
        else {
            panic!("expected users create");
        };
        let input = UserFormInput::from(args);
        assert!(input.password.is_empty());
        assert!(input.to_new_user().is_err());
    }
}
