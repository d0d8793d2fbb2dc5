// Terminal Shell
//
// 从标准输入读取命令，把事件总线上的状态变化渲染到标准输出。
// 日志写到标准错误，不会混入对话。

use futures::StreamExt;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::account::{account_login, account_register};
use super::chat::{chat_focus_input, chat_submit};
use super::config::config_get_all;
use super::navigation::{introduction_continue, navigation_back, navigation_current, navigation_go};
use crate::infrastructure::{AppEvent, AppState};
use crate::modules::chat::{ChatViewEvent, Sender};
use crate::modules::introduction::{Introduction, Typewriter};
use crate::modules::navigation::{Route, RouteName};
use crate::shared::AppResult;

const TYPING_INDICATOR: &str = "Nova está escribiendo...";

const LOGIN_BANNER: &str = "\
¡Bienvenido a LexEdu!
Nota: Esta aplicación está en fase beta, solo incluye el asistente virtual.
  1. Preguntas detalladas: formule preguntas completas para obtener respuestas precisas.
  2. Derecho Familiar: enfocado exclusivamente en derecho familiar.
  3. Comentarios: agradecemos sus comentarios para mejorar.";

const HELP: &str = "\
/login <usuario> <contraseña>     iniciar sesión
/register [<usuario> <contraseña>] crear una cuenta
/continue                          continuar al chat
/back                              volver
/focus                             enfocar el campo de texto
/config                            mostrar la configuración
/quit                              salir
Cualquier otro texto en el chat se envía a Nova.";

/// 一行输入对应的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { username: String, password: String },
    OpenRegister,
    Register { username: String, password: String },
    Continue,
    Back,
    Focus,
    Config,
    Help,
    Quit,
    /// 聊天消息，原样保留
    Say(String),
    Empty,
    Usage(&'static str),
}

pub fn parse_line(line: &str) -> ShellCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellCommand::Empty;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return ShellCommand::Say(line.to_string());
    };

    let parts: Vec<&str> = rest.split_whitespace().collect();
    match parts.as_slice() {
        ["login", username, password] => ShellCommand::Login {
            username: username.to_string(),
            password: password.to_string(),
        },
        ["login", ..] => ShellCommand::Usage("/login <usuario> <contraseña>"),
        ["register"] => ShellCommand::OpenRegister,
        ["register", username, password] => ShellCommand::Register {
            username: username.to_string(),
            password: password.to_string(),
        },
        ["register", ..] => ShellCommand::Usage("/register <usuario> <contraseña>"),
        ["continue"] => ShellCommand::Continue,
        ["back"] => ShellCommand::Back,
        ["focus"] => ShellCommand::Focus,
        ["config"] => ShellCommand::Config,
        ["help"] => ShellCommand::Help,
        ["quit"] | ["exit"] => ShellCommand::Quit,
        _ => ShellCommand::Usage("Comando desconocido, usa /help"),
    }
}

/// 页面标题
pub fn render_route(route: &Route) -> String {
    match route {
        Route::Login => format!("{}\n\n/login <usuario> <contraseña>  |  /register", LOGIN_BANNER),
        Route::Register => "Regístrate\n/register <usuario> <contraseña>  |  /back".to_string(),
        Route::Introduction { user } => Introduction::new(user.clone()).title(),
        Route::Chat(params) => format!(
            "== {} ==  (/back para salir)",
            params.context.conversation_name()
        ),
    }
}

/// 把非页面事件渲染为一行文本，不需要显示的事件返回 `None`
pub fn render_event(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::Chat(ChatViewEvent::MessageAppended { message, .. }) => {
            Some(match message.sender() {
                Sender::User => format!("tú   > {}", message.text()),
                Sender::Assistant => format!("Nova > {}", message.text()),
            })
        }
        AppEvent::Chat(ChatViewEvent::TypingChanged {
            is_typing: true, ..
        }) => Some(TYPING_INDICATOR.to_string()),
        AppEvent::Chat(_) => None,
        AppEvent::Alert(alert) => Some(format!("[!] {}", alert)),
        AppEvent::RouteChanged { route } => Some(render_route(route)),
    }
}

/// 运行交互式终端，直到 `/quit` 或输入结束
pub async fn run(state: Arc<AppState>) -> AppResult<()> {
    let renderer = tokio::spawn(render_events(state.clone(), state.event_bus.subscribe()));

    println!("{}", render_route(&navigation_current(&state).await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = parse_line(&line);
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(e) = execute(&state, command).await {
            println!("[!] {}", e);
        }
    }

    renderer.abort();
    debug!("[Shell] Input closed");
    Ok(())
}

async fn execute(state: &AppState, command: ShellCommand) -> AppResult<()> {
    match command {
        ShellCommand::Login { username, password } => {
            account_login(state, &username, &password).await?;
        }
        ShellCommand::OpenRegister => {
            navigation_go(state, Route::Register).await?;
        }
        ShellCommand::Register { username, password } => {
            if navigation_current(state).await.name() == RouteName::Login {
                navigation_go(state, Route::Register).await?;
            }
            account_register(state, &username, &password).await?;
        }
        ShellCommand::Continue => {
            introduction_continue(state).await?;
        }
        ShellCommand::Back => {
            navigation_back(state).await?;
        }
        ShellCommand::Focus => chat_focus_input(state).await?,
        ShellCommand::Config => {
            let config = config_get_all(state).await?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Say(text) => {
            // 回复在后台到达，通过事件总线渲染
            chat_submit(state, &text).await?;
        }
        ShellCommand::Usage(usage) => println!("{}", usage),
        ShellCommand::Empty | ShellCommand::Quit => {}
    }
    Ok(())
}

async fn render_events(state: Arc<AppState>, mut events: broadcast::Receiver<AppEvent>) {
    let mut reveal: Option<JoinHandle<()>> = None;

    loop {
        match events.recv().await {
            Ok(AppEvent::RouteChanged { route }) => {
                if let Some(handle) = reveal.take() {
                    handle.abort();
                }
                println!("\n{}", render_route(&route));

                if let Route::Introduction { user } = &route {
                    let config = state.config.read().await.introduction.clone();
                    let typewriter = Introduction::new(user.clone()).typewriter(&config);
                    reveal = Some(tokio::spawn(play_typewriter(typewriter)));
                }
            }
            Ok(event) => {
                if let Some(line) = render_event(&event) {
                    println!("{}", line);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("[Shell] Renderer lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// 逐字打印介绍文本
async fn play_typewriter(typewriter: Typewriter) {
    let mut frames = Box::pin(typewriter.reveal());
    let mut shown = 0;

    while let Some(frame) = frames.next().await {
        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{}", &frame[shown..]);
        let _ = stdout.flush();
        shown = frame.len();
    }
    println!("\n\n/continue para continuar");
}
