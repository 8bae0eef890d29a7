use std::sync::Arc;

use freebies_api::{load_free_games, CatalogSource, Summarizer};
use freebies_core::FreeGames;
use freebies_core::models::Offer;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::model::Model;
use crate::update::Command;

pub type CatalogLoadTask = JoinHandle<freebies_core::Result<FreeGames>>;
pub type ResolveTask = JoinHandle<Option<Offer>>;
pub type SummaryTask = JoinHandle<freebies_core::Result<String>>;

/// Backends shared by every spawned task
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogSource>,
    pub summarizer: Arc<dyn Summarizer>,
}

pub struct TaskManager {
    pub catalog_task: Option<CatalogLoadTask>,
    /// Tagged with the slug so a failed join still reports which game it was for
    pub resolve_task: Option<(String, ResolveTask)>,
    pub summary_task: Option<(String, SummaryTask)>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            catalog_task: None,
            resolve_task: None,
            summary_task: None,
        }
    }
}

/// Start whatever background work `command` asks for
pub fn run_command(command: Command, model: &mut Model, tasks: &mut TaskManager, services: &Services) {
    match command {
        Command::None => {}
        Command::LoadCatalog => start_load(model, tasks, services),
        Command::ResolveGame(slug) => {
            // A newer route wins; the stale result would be dropped by update anyway
            if let Some((_, task)) = tasks.resolve_task.take() {
                task.abort();
            }
            if let Some((_, task)) = tasks.summary_task.take() {
                task.abort();
            }
            let catalog = Arc::clone(&services.catalog);
            let wanted = slug.clone();
            let task = tokio::spawn(async move {
                match load_free_games(catalog.as_ref()).await {
                    Ok(games) => games.find_by_slug(&wanted).cloned(),
                    Err(e) => {
                        tracing::warn!(slug = %wanted, error = %e, "lookup fetch failed");
                        None
                    }
                }
            });
            tasks.resolve_task = Some((slug, task));
        }
        Command::Summarize { slug, description } => {
            if let Some((_, task)) = tasks.summary_task.take() {
                task.abort();
            }
            let summarizer = Arc::clone(&services.summarizer);
            let task = tokio::spawn(async move { summarizer.summarize(&description).await });
            tasks.summary_task = Some((slug, task));
        }
    }
}

/// Start the initial/refresh load
pub fn start_load(model: &mut Model, tasks: &mut TaskManager, services: &Services) {
    if tasks.catalog_task.is_some() {
        return;
    }
    model.set_loading(true);
    let catalog = Arc::clone(&services.catalog);
    tasks.catalog_task = Some(tokio::spawn(async move {
        load_free_games(catalog.as_ref()).await
    }));
}

/// Check all running tasks and return messages for completed ones
pub async fn check_tasks(tasks: &mut TaskManager) -> Vec<Message> {
    let mut messages = Vec::new();

    if let Some(task) = tasks.catalog_task.take_if(|t| t.is_finished()) {
        match task.await {
            Ok(Ok(games)) => messages.push(Message::CatalogLoaded(games)),
            Ok(Err(e)) => messages.push(Message::CatalogLoadFailed(e.to_string())),
            Err(_) => messages.push(Message::CatalogLoadFailed("Task failed".to_string())),
        }
    }

    if let Some((slug, task)) = tasks.resolve_task.take_if(|(_, t)| t.is_finished()) {
        let offer = match task.await {
            Ok(offer) => offer,
            Err(e) => {
                tracing::warn!(%slug, error = %e, "lookup task failed");
                None
            }
        };
        messages.push(Message::GameResolved {
            slug,
            offer: offer.map(Box::new),
        });
    }

    if let Some((slug, task)) = tasks.summary_task.take_if(|(_, t)| t.is_finished()) {
        let result = match task.await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(format!("Task failed: {e}")),
        };
        messages.push(Message::SummaryLoaded { slug, result });
    }

    messages
}
