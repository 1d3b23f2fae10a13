//! Store session.
//!
//! A [`StoreSession`] follows one visitor through a store: it remembers the
//! selected language, the loaded event and edition, the visitor's queue and
//! cart identifiers, and sends those back with every request.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::uri::{state_uri, UriSegments};
use crate::client::{Method, Parameters, Transport};
use crate::error::SdkError;
use crate::types::{Cart, Channel, Edition, Event, Seatmap, Show};

/// Quantity change for one ticket type in the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartItemUpdate {
    /// Ticket type uid.
    pub uid: String,
    /// Show the tickets are for.
    pub show: Option<String>,
    /// Seatmap the places belong to.
    pub seatmap: Option<String>,
    /// New quantity.
    pub quantity: Option<u32>,
    /// Selected places, passed through verbatim.
    pub places: Option<String>,
}

impl CartItemUpdate {
    /// Creates an update for the given ticket type.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the show.
    #[must_use]
    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        self.show = Some(show.into());
        self
    }

    /// Sets the seatmap.
    #[must_use]
    pub fn with_seatmap(mut self, seatmap: impl Into<String>) -> Self {
        self.seatmap = Some(seatmap.into());
        self
    }

    /// Sets the selected places.
    #[must_use]
    pub fn with_places(mut self, places: impl Into<String>) -> Self {
        self.places = Some(places.into());
        self
    }

    fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(quantity) = self.quantity {
            params.set("quantity", quantity.to_string());
        }
        params
            .set_non_empty("show", self.show.as_deref())
            .set_non_empty("seatmap", self.seatmap.as_deref())
            .set_non_empty("places", self.places.as_deref());
        params
    }
}

/// One visitor's session against the store API.
#[derive(Debug)]
pub struct StoreSession<T> {
    transport: T,
    language: Option<String>,
    event: Option<Event>,
    edition: Option<Edition>,
    channel: Option<Channel>,
    cart: Option<Cart>,
    preview_token: Option<String>,
    queue_id: Option<String>,
    cart_id: Option<String>,
    entry_url: Option<String>,
}

impl<T: Transport> StoreSession<T> {
    /// Creates an empty session on top of a transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            language: None,
            event: None,
            edition: None,
            channel: None,
            cart: None,
            preview_token: None,
            queue_id: None,
            cart_id: None,
            entry_url: None,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sets the active language. Any code is accepted.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = Some(language.into());
        self
    }

    /// Returns the active language.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the loaded event's default language.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::NotLoaded`] before [`event`](Self::event) has
    /// succeeded, and [`SdkError::MissingField`] if the event lists no
    /// languages.
    pub fn default_language(&self) -> Result<&str, SdkError> {
        self.event
            .as_ref()
            .ok_or(SdkError::NotLoaded("event"))?
            .default_language()
            .ok_or(SdkError::MissingField("event.languages"))
    }

    /// Switches the active language to the event's default language.
    ///
    /// # Errors
    ///
    /// Same as [`default_language`](Self::default_language).
    pub fn set_default_language(&mut self) -> Result<&mut Self, SdkError> {
        let language = self.default_language()?.to_string();
        self.language = Some(language);
        Ok(self)
    }

    /// Builds a store URI.
    ///
    /// With explicit segments the URI is composed from them alone. Without
    /// segments, or with none set, it is composed from the loaded edition,
    /// the selected channel and the stored preview token.
    #[must_use]
    pub fn build_uri(&self, segments: Option<&UriSegments>) -> String {
        match segments.filter(|s| !s.is_empty()) {
            Some(segments) => segments.to_uri(),
            None => state_uri(
                self.edition.as_ref(),
                self.channel.as_ref(),
                self.preview_token.as_deref(),
            ),
        }
    }

    /// Loads an event and makes it the session's event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not an event.
    pub async fn event(&mut self, event: &str) -> Result<&Event, SdkError> {
        let mut params = self.transport.meta().clone();
        params.merge("language", self.language.as_deref());

        let loaded: Event = self.get(&format!("store/{}", event), &params).await?;
        Ok(self.event.insert(loaded))
    }

    /// Loads an edition of an event, optionally scoped to a sales channel.
    ///
    /// The current cart, queue and entry URL are sent along so the service
    /// can resume the visitor's position. A queue or cart id in the response
    /// replaces the stored one; a cart id also triggers a cart fetch. Ids
    /// missing from the response, or sent as `""` or `"0"`, are kept.
    ///
    /// The edition and cart id are stored before the cart fetch, so they stay
    /// updated when only that fetch fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the edition or the follow-up cart request fails.
    pub async fn load(
        &mut self,
        event: &str,
        edition: &str,
        channel: Option<&str>,
        preview_token: Option<&str>,
    ) -> Result<&mut Self, SdkError> {
        let mut path = format!("store/{}/{}", event, edition);
        if let Some(channel) = channel.filter(|c| !c.is_empty()) {
            path.push('/');
            path.push_str(channel);
        }

        let mut params = self.transport.meta().clone();
        params
            .merge("cart", self.cart_id())
            .merge("queue", self.queue_id())
            .merge("entry_url", self.entry_url())
            .merge("language", self.language.as_deref())
            .merge("preview_token", preview_token);

        self.preview_token = preview_token.map(str::to_string);
        self.edition = self.get(&path, &params).await?;

        self.refresh_queue_id();
        self.refresh_cart_id().await?;
        Ok(self)
    }

    fn refresh_queue_id(&mut self) {
        if let Some(queue_id) = self.edition.as_ref().and_then(Edition::queue_id) {
            debug!(queue_id, "queue assigned");
            self.queue_id = Some(queue_id.to_string());
        }
    }

    async fn refresh_cart_id(&mut self) -> Result<(), SdkError> {
        let Some(cart_id) = self.edition.as_ref().and_then(Edition::cart_id) else {
            return Ok(());
        };

        debug!(cart_id, "cart assigned");
        self.cart_id = Some(cart_id.to_string());
        self.fetch_cart().await?;
        Ok(())
    }

    /// Fetches the current cart and stores it on the session.
    ///
    /// Without a cart id the request goes out with an empty id segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a cart.
    pub async fn fetch_cart(&mut self) -> Result<&Cart, SdkError> {
        let path = format!("cart/{}", self.cart_id().unwrap_or_default());
        let params = self.language_params();

        let cart: Cart = self.get(&path, &params).await?;
        Ok(self.cart.insert(cart))
    }

    /// Returns the cart id, or `None` if unset or empty.
    #[must_use]
    pub fn cart_id(&self) -> Option<&str> {
        non_empty(&self.cart_id)
    }

    /// Sets the cart id.
    pub fn set_cart_id(&mut self, cart_id: impl Into<String>) -> &mut Self {
        self.cart_id = Some(cart_id.into());
        self
    }

    /// Returns the queue id, or `None` if unset or empty.
    #[must_use]
    pub fn queue_id(&self) -> Option<&str> {
        non_empty(&self.queue_id)
    }

    /// Sets the queue id.
    pub fn set_queue_id(&mut self, queue_id: impl Into<String>) -> &mut Self {
        self.queue_id = Some(queue_id.into());
        self
    }

    /// Returns the entry URL, or `None` if unset or empty.
    #[must_use]
    pub fn entry_url(&self) -> Option<&str> {
        non_empty(&self.entry_url)
    }

    /// Sets the URL the visitor entered the store from.
    pub fn set_entry_url(&mut self, entry_url: impl Into<String>) -> &mut Self {
        self.entry_url = Some(entry_url.into());
        self
    }

    /// Selects the sales channel used when building URIs from state.
    pub fn set_channel(&mut self, channel: Channel) -> &mut Self {
        self.channel = Some(channel);
        self
    }

    /// Returns the selected sales channel.
    #[must_use]
    pub fn channel(&self) -> Option<&Channel> {
        self.channel.as_ref()
    }

    /// Returns the loaded event.
    #[must_use]
    pub fn current_event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    /// Returns the loaded edition.
    #[must_use]
    pub fn edition(&self) -> Option<&Edition> {
        self.edition.as_ref()
    }

    /// Returns the last fetched cart.
    #[must_use]
    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Returns the preview token passed to the last load.
    #[must_use]
    pub fn preview_token(&self) -> Option<&str> {
        self.preview_token.as_deref()
    }

    /// Returns true if no edition is loaded.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.edition.is_none()
    }

    /// Returns true if the loaded edition puts the visitor in a queue.
    #[must_use]
    pub fn is_queue(&self) -> bool {
        self.edition.as_ref().is_some_and(|e| e.queue.is_some())
    }

    /// Returns true if the loaded edition carries a cart.
    #[must_use]
    pub fn is_cart(&self) -> bool {
        self.edition.as_ref().is_some_and(|e| e.cart.is_some())
    }

    /// Returns true if a cart was fetched and it is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.cart.as_ref().is_some_and(|c| c.pending)
    }

    /// Changes the quantity of a ticket type in the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_cart_item(&self, update: &CartItemUpdate) -> Result<(), SdkError> {
        let path = self.cart_type_path(&update.uid);
        self.send(Method::Put, &path, &update.parameters()).await?;
        Ok(())
    }

    /// Removes a ticket type from the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_cart_item(
        &self,
        uid: &str,
        show: Option<&str>,
        seatmap: Option<&str>,
    ) -> Result<(), SdkError> {
        let mut params = Parameters::new();
        params
            .set_non_empty("show", show)
            .set_non_empty("seatmap", seatmap);

        let path = self.cart_type_path(uid);
        self.send(Method::Delete, &path, &params).await?;
        Ok(())
    }

    /// Fetches a show. The result is not stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a show.
    pub async fn show(
        &self,
        event: &str,
        edition: &str,
        channel: &str,
        show_id: &str,
    ) -> Result<Show, SdkError> {
        let path = format!("store/{}/{}/{}/{}", event, edition, channel, show_id);
        self.get(&path, &self.cart_params()).await
    }

    /// Fetches the seatmap of a show. The result is not stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a seatmap.
    pub async fn seatmap(
        &self,
        event: &str,
        edition: &str,
        channel: &str,
        show_id: &str,
        seatmap_id: &str,
    ) -> Result<Seatmap, SdkError> {
        let path = format!(
            "store/{}/{}/{}/{}/{}",
            event, edition, channel, show_id, seatmap_id
        );
        self.get(&path, &self.cart_params()).await
    }

    /// Fetches seatmap details independent of any show.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a seatmap.
    pub async fn seatmap_details(&self, seatmap_id: &str) -> Result<Seatmap, SdkError> {
        let path = format!("seatmap/{}", seatmap_id);
        self.get(&path, &self.language_params()).await
    }

    fn cart_type_path(&self, uid: &str) -> String {
        format!("cart/{}/types/{}", self.cart_id().unwrap_or_default(), uid)
    }

    fn language_params(&self) -> Parameters {
        let mut params = Parameters::new();
        params.merge("language", self.language.as_deref());
        params
    }

    fn cart_params(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .merge("cart", self.cart_id())
            .merge("language", self.language.as_deref());
        params
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> Result<Value, SdkError> {
        debug!(%method, path, "store call");
        Ok(self.transport.send(method, path, params).await?)
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &Parameters,
    ) -> Result<R, SdkError> {
        let value = self.send(Method::Get, path, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::ClientError;

    fn expo_event() -> Value {
        json!({ "name": "Expo", "languages": ["nl", "fr", "en"] })
    }

    #[tokio::test]
    async fn test_new_session_is_closed() {
        let store = StoreSession::new(MockTransport::new());
        assert!(store.is_closed());
        assert!(!store.is_queue());
        assert!(!store.is_cart());
        assert!(!store.is_pending());
        assert_eq!(store.cart_id(), None);
        assert_eq!(store.queue_id(), None);
        assert_eq!(store.entry_url(), None);
        assert_eq!(store.language(), None);
    }

    #[test]
    fn test_accessors_treat_empty_as_unset() {
        let mut store = StoreSession::new(MockTransport::new());
        store.set_cart_id("").set_queue_id("").set_entry_url("");

        assert_eq!(store.cart_id(), None);
        assert_eq!(store.queue_id(), None);
        assert_eq!(store.entry_url(), None);

        store
            .set_cart_id("C9")
            .set_queue_id("Q9")
            .set_entry_url("https://example.com");
        assert_eq!(store.cart_id(), Some("C9"));
        assert_eq!(store.queue_id(), Some("Q9"));
        assert_eq!(store.entry_url(), Some("https://example.com"));
    }

    #[test]
    fn test_default_language_requires_event() {
        let mut store = StoreSession::new(MockTransport::new());
        assert!(matches!(
            store.default_language(),
            Err(SdkError::NotLoaded("event"))
        ));
        assert!(store.set_default_language().is_err());
        assert_eq!(store.language(), None);
    }

    #[tokio::test]
    async fn test_event_merges_meta_and_language() {
        let transport = MockTransport::new()
            .with_meta("apiversion", "1.0")
            .with_meta("language", "de")
            .respond("store/expo", expo_event());
        let mut store = StoreSession::new(transport);
        store.set_language("en");

        let event = store.event("expo").await.expect("event loads");
        assert_eq!(event.languages.len(), 3);

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "store/expo");
        assert_eq!(request.params.get("language"), Some("en"));
        assert_eq!(request.params.get("apiversion"), Some("1.0"));
    }

    #[tokio::test]
    async fn test_event_without_language_drops_meta_language() {
        let transport = MockTransport::new()
            .with_meta("language", "de")
            .respond("store/expo", expo_event());
        let mut store = StoreSession::new(transport);

        store.event("expo").await.expect("event loads");

        let request = store.transport().last().expect("request sent");
        assert!(!request.params.contains_key("language"));
    }

    #[tokio::test]
    async fn test_default_language_from_event() {
        let transport = MockTransport::new().respond("store/expo", expo_event());
        let mut store = StoreSession::new(transport);

        store.event("expo").await.expect("event loads");
        assert_eq!(store.default_language().ok(), Some("nl"));

        store.set_default_language().expect("default language");
        assert_eq!(store.language(), Some("nl"));
        assert!(store.current_event().is_some());
    }

    #[tokio::test]
    async fn test_default_language_empty_list() {
        let transport = MockTransport::new().respond("store/expo", json!({ "languages": [] }));
        let mut store = StoreSession::new(transport);

        store.event("expo").await.expect("event loads");
        assert!(matches!(
            store.default_language(),
            Err(SdkError::MissingField("event.languages"))
        ));
    }

    #[tokio::test]
    async fn test_default_language_null_list() {
        let transport = MockTransport::new().respond(
            "store/expo",
            json!({ "name": "Expo", "languages": null }),
        );
        let mut store = StoreSession::new(transport);

        store.event("expo").await.expect("event loads");
        assert!(matches!(
            store.default_language(),
            Err(SdkError::MissingField("event.languages"))
        ));
    }

    #[tokio::test]
    async fn test_load_with_queue_and_no_cart() {
        let transport = MockTransport::new().respond(
            "store/expo/2024/vip",
            json!({ "uri": "2024", "queue": { "queueid": "Q1" } }),
        );
        let mut store = StoreSession::new(transport);
        assert!(store.is_closed());

        store
            .load("expo", "2024", Some("vip"), None)
            .await
            .expect("edition loads");

        assert!(!store.is_closed());
        assert!(store.is_queue());
        assert!(!store.is_cart());
        assert_eq!(store.queue_id(), Some("Q1"));
        assert_eq!(store.cart_id(), None);
        assert!(store.cart().is_none());
        assert_eq!(store.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_load_with_cart_fetches_cart_once() {
        let transport = MockTransport::new()
            .respond(
                "store/expo/2024",
                json!({ "uri": "2024", "cart": { "cartid": "C1" } }),
            )
            .respond("cart/C1", json!({ "cartid": "C1", "pending": true }));
        let mut store = StoreSession::new(transport);
        store.set_language("fr");

        store
            .load("expo", "2024", None, None)
            .await
            .expect("edition loads");

        assert_eq!(store.cart_id(), Some("C1"));
        assert!(store.is_cart());
        assert!(store.is_pending());
        assert_eq!(store.transport().count(Method::Get, "cart/C1"), 1);

        let request = store.transport().last().expect("cart request");
        assert_eq!(request.path, "cart/C1");
        assert_eq!(request.params.get("language"), Some("fr"));
        assert_eq!(request.params.len(), 1);
    }

    #[tokio::test]
    async fn test_load_sends_session_state() {
        let transport = MockTransport::new()
            .with_meta("apiversion", "1.0")
            .with_meta("cart", "stale")
            .respond("store/expo/2024", json!({ "uri": "2024" }));
        let mut store = StoreSession::new(transport);
        store
            .set_language("en")
            .set_queue_id("Q0")
            .set_entry_url("https://expo.example.com");

        store
            .load("expo", "2024", Some(""), Some("tok"))
            .await
            .expect("edition loads");

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.path, "store/expo/2024");
        assert_eq!(request.params.get("apiversion"), Some("1.0"));
        assert_eq!(request.params.get("queue"), Some("Q0"));
        assert_eq!(
            request.params.get("entry_url"),
            Some("https://expo.example.com")
        );
        assert_eq!(request.params.get("language"), Some("en"));
        assert_eq!(request.params.get("preview_token"), Some("tok"));
        assert!(!request.params.contains_key("cart"));
        assert_eq!(store.preview_token(), Some("tok"));
    }

    #[tokio::test]
    async fn test_ids_persist_across_loads() {
        let transport = MockTransport::new()
            .respond(
                "store/expo/2024",
                json!({ "queue": { "queueid": "Q1" }, "cart": { "cartid": "C1" } }),
            )
            .respond("cart/C1", json!({ "cartid": "C1" }))
            .respond("store/expo/2025", json!({ "uri": "2025" }));
        let mut store = StoreSession::new(transport);

        store
            .load("expo", "2024", None, None)
            .await
            .expect("first load");
        store
            .load("expo", "2025", None, None)
            .await
            .expect("second load");

        assert_eq!(store.queue_id(), Some("Q1"));
        assert_eq!(store.cart_id(), Some("C1"));
        assert!(!store.is_queue());
        assert!(!store.is_cart());
        assert!(store.cart().is_some());

        let request = store.transport().last().expect("second load request");
        assert_eq!(request.path, "store/expo/2025");
        assert_eq!(request.params.get("queue"), Some("Q1"));
        assert_eq!(request.params.get("cart"), Some("C1"));
    }

    #[tokio::test]
    async fn test_load_is_chainable() {
        let transport = MockTransport::new().respond("store/expo/2024", json!({ "uri": "2024" }));
        let mut store = StoreSession::new(transport);

        let uri = store
            .load("expo", "2024", None, Some("tok"))
            .await
            .expect("edition loads")
            .build_uri(None);

        assert_eq!(uri, "2024?preview_token=tok");
    }

    #[tokio::test]
    async fn test_load_null_edition_stays_closed() {
        let transport = MockTransport::new().respond("store/expo/2024", Value::Null);
        let mut store = StoreSession::new(transport);

        store
            .load("expo", "2024", None, None)
            .await
            .expect("load succeeds");
        assert!(store.is_closed());
    }

    #[tokio::test]
    async fn test_load_propagates_transport_error() {
        let mut store = StoreSession::new(MockTransport::new());

        let result = store.load("expo", "2024", None, None).await;
        assert!(matches!(
            result,
            Err(SdkError::Client(ClientError::NotFound { .. }))
        ));
        assert!(store.is_closed());
    }

    #[tokio::test]
    async fn test_load_keeps_edition_when_cart_fetch_fails() {
        let transport = MockTransport::new().respond(
            "store/expo/2024",
            json!({ "uri": "2024", "cart": { "cartid": "C1" } }),
        );
        let mut store = StoreSession::new(transport);

        let result = store.load("expo", "2024", None, None).await;
        assert!(matches!(
            result,
            Err(SdkError::Client(ClientError::NotFound { ref path, .. })) if path == "cart/C1"
        ));

        assert!(!store.is_closed());
        assert!(store.is_cart());
        assert_eq!(store.cart_id(), Some("C1"));
        assert!(store.cart().is_none());
        assert_eq!(store.transport().count(Method::Get, "cart/C1"), 1);
    }

    #[tokio::test]
    async fn test_load_ignores_zero_cart_id() {
        let transport = MockTransport::new().respond(
            "store/expo/2024",
            json!({ "cart": { "cartid": "0" }, "queue": { "queueid": 0 } }),
        );
        let mut store = StoreSession::new(transport);
        store.set_cart_id("C1").set_queue_id("Q1");

        store
            .load("expo", "2024", None, None)
            .await
            .expect("edition loads");

        assert_eq!(store.cart_id(), Some("C1"));
        assert_eq!(store.queue_id(), Some("Q1"));
        assert!(store.cart().is_none());
        assert_eq!(store.transport().requests().len(), 1);
        assert_eq!(store.transport().count(Method::Get, "cart/0"), 0);
    }

    #[tokio::test]
    async fn test_load_numeric_edition_uri() {
        let transport = MockTransport::new().respond(
            "store/expo/2024",
            json!({ "uri": 2024, "queue": { "queueid": "Q1" } }),
        );
        let mut store = StoreSession::new(transport);

        store
            .load("expo", "2024", None, None)
            .await
            .expect("edition loads");

        assert!(!store.is_closed());
        assert_eq!(store.queue_id(), Some("Q1"));
        assert_eq!(store.build_uri(None), "2024");
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_edition() {
        let transport = MockTransport::new().respond("store/expo/2024", json!([1, 2, 3]));
        let mut store = StoreSession::new(transport);

        let result = store.load("expo", "2024", None, None).await;
        assert!(matches!(
            result,
            Err(SdkError::Client(ClientError::Deserialization(_)))
        ));
    }

    #[tokio::test]
    async fn test_pending_requires_fetched_cart() {
        let transport = MockTransport::new().respond("cart/C1", json!({ "pending": 0 }));
        let mut store = StoreSession::new(transport);
        store.set_cart_id("C1");
        assert!(!store.is_pending());

        store.fetch_cart().await.expect("cart loads");
        assert!(!store.is_pending());
    }

    #[tokio::test]
    async fn test_fetch_cart_without_id() {
        let transport = MockTransport::new().respond("cart/", json!({}));
        let mut store = StoreSession::new(transport);

        store.fetch_cart().await.expect("cart loads");

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.path, "cart/");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn test_update_cart_item_includes_given_fields() {
        let mut store = StoreSession::new(MockTransport::new());
        store.set_cart_id("C1");

        let update = CartItemUpdate::new("T1")
            .with_quantity(2)
            .with_show("S1")
            .with_seatmap("M1")
            .with_places("A1,A2");
        store.update_cart_item(&update).await.expect("update sent");

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "cart/C1/types/T1");
        assert_eq!(request.params.get("quantity"), Some("2"));
        assert_eq!(request.params.get("show"), Some("S1"));
        assert_eq!(request.params.get("seatmap"), Some("M1"));
        assert_eq!(request.params.get("places"), Some("A1,A2"));
    }

    #[tokio::test]
    async fn test_update_cart_item_omits_absent_fields() {
        let mut store = StoreSession::new(MockTransport::new());
        store.set_cart_id("C1");

        let update = CartItemUpdate::new("T1").with_quantity(0).with_show("");
        store.update_cart_item(&update).await.expect("update sent");

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.params.get("quantity"), Some("0"));
        assert_eq!(request.params.len(), 1);

        store
            .update_cart_item(&CartItemUpdate::new("T2"))
            .await
            .expect("update sent");
        let request = store.transport().last().expect("request sent");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn test_remove_cart_item() {
        let mut store = StoreSession::new(MockTransport::new());
        store.set_cart_id("C1");

        store
            .remove_cart_item("T1", Some("S1"), None)
            .await
            .expect("removal sent");

        let request = store.transport().last().expect("request sent");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "cart/C1/types/T1");
        assert_eq!(request.params.get("show"), Some("S1"));
        assert!(!request.params.contains_key("seatmap"));

        store
            .remove_cart_item("T1", None, Some(""))
            .await
            .expect("removal sent");
        let request = store.transport().last().expect("request sent");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn test_show_and_seatmap_requests() {
        let transport = MockTransport::new()
            .respond("store/expo/2024/vip/12", json!({ "id": 12 }))
            .respond("store/expo/2024/vip/12/5", json!({ "id": 5 }))
            .respond("seatmap/5", json!({ "id": "5", "rows": [] }));
        let mut store = StoreSession::new(transport);
        store.set_language("en").set_cart_id("C1");

        let show = store
            .show("expo", "2024", "vip", "12")
            .await
            .expect("show loads");
        assert_eq!(show.id.as_deref(), Some("12"));
        let request = store.transport().last().expect("request sent");
        assert_eq!(request.params.get("cart"), Some("C1"));
        assert_eq!(request.params.get("language"), Some("en"));

        let seatmap = store
            .seatmap("expo", "2024", "vip", "12", "5")
            .await
            .expect("seatmap loads");
        assert_eq!(seatmap.id.as_deref(), Some("5"));

        let details = store.seatmap_details("5").await.expect("details load");
        assert!(details.get("rows").is_some());
        let request = store.transport().last().expect("request sent");
        assert_eq!(request.path, "seatmap/5");
        assert!(!request.params.contains_key("cart"));
        assert_eq!(request.params.get("language"), Some("en"));

        assert!(store.is_closed());
        assert!(store.cart().is_none());
    }

    #[tokio::test]
    async fn test_build_uri_from_state_and_segments() {
        let transport = MockTransport::new().respond("store/expo/2024", json!({ "uri": "2024" }));
        let mut store = StoreSession::new(transport);
        assert_eq!(store.build_uri(None), "");

        store
            .load("expo", "2024", None, None)
            .await
            .expect("edition loads");
        store.set_channel(Channel::new("vip"));

        assert_eq!(store.build_uri(None), "2024/vip");
        assert_eq!(store.build_uri(Some(&UriSegments::new())), "2024/vip");
        assert_eq!(
            store.build_uri(Some(&UriSegments::new().with_language("en"))),
            "en"
        );
        assert_eq!(
            store.build_uri(Some(
                &UriSegments::new()
                    .with_host("eventsquare.store", "expo")
                    .with_edition("2024")
            )),
            "expo.eventsquare.store/2024"
        );
        assert_eq!(store.channel().and_then(|c| c.uri.as_deref()), Some("vip"));
        assert!(store.edition().is_some());
    }
}
