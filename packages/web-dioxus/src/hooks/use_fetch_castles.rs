//! Castle fetching hook

use dioxus::prelude::*;

use crate::types::{Castle, CountryCode};

/// Observable state exposed by [`use_fetch_castles`].
#[derive(Clone, Copy)]
pub struct CastleFetch {
    /// The last successfully fetched listing; empty until the first response
    /// lands and untouched by failed calls.
    pub castles: Signal<Vec<Castle>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Fetches the castle listing for `country`, on first run and again whenever
/// the code changes.
///
/// At most one request is *current* per hook instance: every request carries
/// the generation it was issued under, and a response whose generation is no
/// longer current is dropped. A rapid country switch therefore cannot clobber
/// the newer selection's result with a slower, older response.
pub fn use_fetch_castles(country: ReadOnlySignal<CountryCode>) -> CastleFetch {
    let mut castles = use_signal(Vec::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let code = country();

        let issued = generation.peek().wrapping_add(1);
        generation.set(issued);

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = fetch_castles(code).await;

            // A newer request superseded this one; let it drive the state.
            if *generation.peek() != issued {
                return;
            }

            match result {
                Ok(found) => castles.set(found),
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch castles");
                    error.set(Some(e.to_string()));
                }
            }

            loading.set(false);
        });
    });

    CastleFetch {
        castles,
        loading,
        error,
    }
}

/// Server function bridging to the castles REST API.
#[server]
async fn fetch_castles(country: CountryCode) -> Result<Vec<Castle>, ServerFnError> {
    crate::api::server_client()
        .castles_by_country(country)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
