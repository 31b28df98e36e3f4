use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::command::VaultCommand;
use crate::config::VaultConfig;
use crate::host::PlayerDirectory;
use crate::kernel::constants::{APP_NAME, APP_VERSION};
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::permission::{Permission, SuperPerms};
use crate::service::{ServicePriority, ServiceRegistry};
use crate::update::{self, UpdateStatus};

/// Owns the process-wide service registry and drives Vault's own lifecycle
pub struct Application {
    config: VaultConfig,
    services: Arc<ServiceRegistry>,
    directory: Arc<dyn PlayerDirectory>,
    started: bool,
    update_task: Option<JoinHandle<UpdateStatus>>,
}

impl Application {
    /// Create an application with an empty registry bound to `directory`
    pub fn new(config: VaultConfig, directory: Arc<dyn PlayerDirectory>) -> Self {
        log::info!("Initializing {} v{}", APP_NAME, APP_VERSION);
        Self {
            config,
            services: Arc::new(ServiceRegistry::new()),
            directory,
            started: false,
            update_task: None,
        }
    }

    /// Shared handle on the registry; providers register through it
    pub fn services(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.services)
    }

    pub fn directory(&self) -> Arc<dyn PlayerDirectory> {
        Arc::clone(&self.directory)
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Register the fallback permission provider and schedule the update check.
    ///
    /// The update check only runs when enabled and when called from inside a
    /// tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Start,
                message: format!("{} is already started", APP_NAME),
            });
        }

        let superperms: Arc<dyn Permission> = Arc::new(SuperPerms::new(Arc::clone(&self.directory)));
        self.services
            .register_provider(superperms, APP_NAME, ServicePriority::LOWEST);

        if self.config.update.enabled {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let settings = self.config.update.clone();
                    self.update_task = Some(handle.spawn(async move {
                        update::run_update_check(&settings, APP_VERSION).await
                    }));
                }
                Err(_) => log::debug!("No async runtime available; skipping the update check"),
            }
        }

        self.started = true;
        log::info!("{} started", APP_NAME);
        Ok(())
    }

    /// Wait for the update check scheduled by [`start`](Self::start), if one is pending
    pub async fn await_update_check(&mut self) -> Option<UpdateStatus> {
        let task = self.update_task.take()?;
        match task.await {
            Ok(status) => Some(status),
            Err(e) => {
                log::debug!("Update check did not complete: {}", e);
                None
            }
        }
    }

    /// Remove every registration Vault owns and stop a pending update check
    pub fn shutdown(&mut self) -> Result<()> {
        if !self.started {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Shutdown,
                message: format!("{} is not running", APP_NAME),
            });
        }

        if let Some(task) = self.update_task.take() {
            task.abort();
        }
        let removed = self.services.unregister_all(APP_NAME);
        self.started = false;
        log::info!("{} stopped ({} registration(s) removed)", APP_NAME, removed);
        Ok(())
    }

    /// The `/vault` command bound to this application's registry and players
    pub fn command(&self) -> VaultCommand {
        VaultCommand::new(self.services(), self.directory())
    }
}
