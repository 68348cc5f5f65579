/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config 読み込み (--base-url で上書き) → AppContext 組み立て
 * - サブコマンドを各ページに振り分け、結果パネルと通知を出力
 * - 最新の通知がエラーなら終了コードを失敗にする
 */
use std::io;
use std::panic;
use std::process::{self, ExitCode};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, DocsCommand, PostsCommand, UsersCommand};
use crate::config::Config;
use crate::state::AppContext;
use crate::ui::pages::{DocsPage, HomePage, Osc52Clipboard, PostsPage, UsersPage};
use crate::ui::{AlwaysConfirm, NotificationCenter, PostTab, Severity, TerminalConfirm};

fn init_tracing() {
    // RUST_LOG wins when set. Ex:
    // RUST_LOG=debug,reqwest=info social-client users search
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,social_client=info"));

    // stdout is reserved for panels.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

/// What a command leaves on screen.
struct Screen {
    body: String,
    notifications: NotificationCenter,
}

impl Screen {
    fn new(body: impl Into<String>, notifications: NotificationCenter) -> Self {
        Self {
            body: body.into(),
            notifications,
        }
    }

    fn print(&self) {
        if !self.body.is_empty() {
            println!("{}", self.body.trim_end());
        }
        for notification in self.notifications.active(Instant::now()) {
            println!("{notification}");
        }
    }

    fn exit_code(&self) -> ExitCode {
        match self.notifications.latest() {
            Some(n) if n.severity == Severity::Error => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env()?.override_base_url(cli.base_url.as_deref())?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "using API at {} in {:?} mode",
        config.base_url,
        config.app_env
    );

    let ctx = AppContext::new(config)?;
    let screen = dispatch(cli.command, cli.yes, &ctx).await;
    screen.print();
    Ok(screen.exit_code())
}

async fn dispatch(command: Command, yes: bool, ctx: &AppContext) -> Screen {
    let client = &ctx.client;

    match command {
        Command::Health => {
            let mut page = HomePage::new();
            page.check_api_status(client).await;
            Screen::new(format!("Статус API: {}", page.status), page.notifications)
        }
        Command::Users { action } => {
            let mut page = UsersPage::new();
            match action {
                UsersCommand::Create(args) => {
                    page.create_form = args.into();
                    page.create_user(client).await;
                }
                UsersCommand::Search(args) => {
                    page.search_form = args.into();
                    page.search_users(client).await;
                }
                UsersCommand::Update(args) => {
                    page.update_form = args.into();
                    page.update_user(client).await;
                }
                UsersCommand::Delete(args) => {
                    page.delete_form = args.into();
                    if yes {
                        page.delete_user(client, &mut AlwaysConfirm).await;
                    } else {
                        page.delete_user(client, &mut TerminalConfirm).await;
                    }
                }
            }
            Screen::new(page.active_panel().to_string(), page.notifications)
        }
        Command::Posts { action } => {
            let mut page = PostsPage::new();
            match action {
                PostsCommand::Create(args) => {
                    page.create_form = args.into();
                    page.create_post(client).await;
                }
                PostsCommand::Search(args) => {
                    page.search_form = args.into();
                    page.search_post(client).await;
                }
                PostsCommand::Update(args) => {
                    page.update_form = args.into();
                    page.update_post(client).await;
                }
                PostsCommand::List(args) => {
                    page.show_tab(PostTab::List, client);
                    page.filter_posts(&args.filter);
                }
            }
            Screen::new(page.active_panel().to_string(), page.notifications)
        }
        Command::Docs { action } => {
            let mut page = DocsPage::new(ctx.config.base_url.clone());
            match action {
                DocsCommand::Show { section } => {
                    page.show_section(section.into());
                    Screen::new(page.to_string(), page.notifications)
                }
                DocsCommand::Copy { button } => {
                    page.copy(button, &mut Osc52Clipboard::new(io::stdout()));
                    Screen::new(String::new(), page.notifications)
                }
            }
        }
    }
}
