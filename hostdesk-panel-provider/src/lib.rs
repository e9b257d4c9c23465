//! # hostdesk-panel-provider
//!
//! A unified hosting-panel abstraction library for managing domains, hosting
//! accounts, mailboxes, SSL, backups and cloud instances across multiple
//! control-plane providers.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Cloud Instances |
//! |----------|-------------|-----------------|
//! | cPanel/WHM | `cpanel` | no |
//! | Plesk | `plesk` | no |
//! | Hostinger | `hostinger` | yes |
//! | Spaceship | `spaceship` | no |
//!
//! ## Modes
//!
//! Every adapter is constructed in a fixed [`Mode`]: `test` serves canned
//! fixture responses with no network I/O, `live` performs real provider API
//! calls. The mode never changes for the lifetime of an instance; configure
//! a second instance to use the other mode.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostdesk_panel_provider::{
//!     Mode, PanelAdapterFactory, PanelConfig, PanelProvider, PanelType,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let factory = PanelAdapterFactory::new();
//!
//!     // 1. Build an adapter from a stored configuration record
//!     let config = PanelConfig::new(
//!         "p1",
//!         PanelType::Cpanel,
//!         "https://server1.example.com:2083",
//!         "api-key",
//!         Mode::Test,
//!     );
//!     let panel = factory.create_adapter(config)?;
//!
//!     // 2. Check the connection
//!     panel.authenticate().await?;
//!
//!     // 3. List domains
//!     for domain in panel.list_domains().await? {
//!         println!("{} ({:?})", domain.name, domain.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Optional capabilities
//!
//! Cloud-VM support is a separate capability: query it with
//! [`PanelProvider::cloud()`] before offering the feature, or call the
//! instance operations directly and handle
//! [`ProviderError::UnsupportedCapability`], which is raised before any
//! request is attempted on panels without VM support.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError) with
//! provider-and-mode-tagged messages. This library performs no retry or
//! backoff; that policy belongs to the caller.

mod factory;
mod providers;
mod traits;
mod types;

// Re-export the shared core surface
pub use hostdesk_provider_core::{Mode, ProviderError, Result};

// Re-export factory and metadata listing
pub use factory::{PanelAdapterFactory, get_all_panel_metadata};

// Re-export the capability contracts
pub use traits::{CloudCapable, PanelProvider};

// Re-export types
pub use types::{
    BackupInfo, BackupStatus, BackupType, CloudInstance, CreateDomainRequest,
    CreateEmailAccountRequest, CreateHostingAccountRequest, CreateInstanceRequest, DnsRecordEntry,
    DomainInfo, DomainStatus, EmailAccount, HostingAccount, HostingStatus, InstallSslRequest,
    InstanceStatus, MigrationStatus, MigrationTask, OperationAck, PanelConfig, PanelFeatures,
    PanelMetadata, PanelType, ResourceUsage, SslInfo, SslStatus, TransferDomainRequest,
};

// Re-export concrete adapters (behind feature flags)
#[cfg(feature = "cpanel")]
pub use providers::CpanelAdapter;

#[cfg(feature = "plesk")]
pub use providers::PleskAdapter;

#[cfg(feature = "hostinger")]
pub use providers::HostingerAdapter;

#[cfg(feature = "spaceship")]
pub use providers::SpaceshipAdapter;
