/// Global Tokio runtime for background rate fetches
///
/// eframe owns the main thread and does not run a tokio reactor, but reqwest
/// needs one. This static runtime bridges the two:
/// 1. Fetch tasks are spawned onto it from the UI thread without blocking
/// 2. Results travel back through the app's event channel and are applied
///    on the UI thread in `App::on_tick`
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = service.fetch_rate(base, target).await;
///     let _ = event_tx.send(AppEvent::RateFetched { request, result }).await;
/// });
/// ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .thread_name("converter-fetch")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime for async HTTP operations")
});
