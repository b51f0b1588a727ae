//! A list of cards behind a running carousel.

use tokio::task::{JoinError, JoinHandle};
use tracing::info;
use vitrine_carousel::{
    Carousel, CarouselHandle, CarouselOptions, CarouselSnapshot, Controls,
    HeadlessTrack, TrackProbe, channel,
};
use vitrine_model::ExhibitionID;

use crate::cards::{self, Card, CardKind};
use crate::infra::content::ContentSource;

/// Geometry of the track a showcase renders into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub card_width: f32,
    pub viewport_width: f32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            card_width: 320.0,
            viewport_width: 1280.0,
        }
    }
}

#[derive(Debug)]
pub struct Showcase {
    kind: CardKind,
    cards: Vec<Card>,
    handle: CarouselHandle,
    probe: TrackProbe,
    task: JoinHandle<Carousel<HeadlessTrack>>,
}

impl Showcase {
    /// Fill a track with `cards`, position it and start the carousel
    /// driver. Must be called inside a tokio runtime.
    pub fn start(
        kind: CardKind,
        cards: Vec<Card>,
        controls: Controls,
        options: CarouselOptions,
        layout: TrackLayout,
    ) -> Option<Self> {
        let track = HeadlessTrack::new(
            cards.len(),
            layout.card_width,
            layout.viewport_width,
        );
        let probe = track.probe();

        let mut carousel = Carousel::init(Some(track), controls, options)?;
        carousel.refresh();
        info!(
            carousel = %carousel.id(),
            ?kind,
            cards = cards.len(),
            pages = carousel.state().page_count(),
            "Showcase started"
        );

        let (handle, driver) = channel(carousel);
        let task = driver.spawn();

        Some(Self {
            kind,
            cards,
            handle,
            probe,
            task,
        })
    }

    pub async fn exhibitions(
        source: &dyn ContentSource,
        options: CarouselOptions,
        layout: TrackLayout,
    ) -> Option<Self> {
        let exhibitions = source.exhibitions().await;
        Self::start(
            CardKind::Exhibition,
            cards::exhibition_cards(&exhibitions),
            Controls::default(),
            options,
            layout,
        )
    }

    pub async fn news(
        source: &dyn ContentSource,
        options: CarouselOptions,
        layout: TrackLayout,
    ) -> Option<Self> {
        let news = source.news().await;
        Self::start(
            CardKind::News,
            cards::news_cards(&news),
            Controls::default(),
            options,
            layout,
        )
    }

    /// Exhibits of one exhibition. An unknown exhibition gives an empty,
    /// static strip.
    pub async fn exhibits(
        source: &dyn ContentSource,
        exhibition: &ExhibitionID,
        options: CarouselOptions,
        layout: TrackLayout,
    ) -> Option<Self> {
        let cards = source
            .exhibition(exhibition)
            .await
            .map(|exhibition| cards::exhibit_cards(&exhibition))
            .unwrap_or_default();
        Self::start(CardKind::Exhibit, cards, Controls::default(), options, layout)
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Message to show instead of the track, `None` when there are cards.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.cards.is_empty().then(|| self.kind.empty_message())
    }

    pub fn handle(&self) -> &CarouselHandle {
        &self.handle
    }

    pub fn probe(&self) -> &TrackProbe {
        &self.probe
    }

    /// Cards currently in view, left to right.
    pub async fn visible_cards(&self) -> Option<&[Card]> {
        let snapshot = self.handle.snapshot().await?;
        let start = snapshot.current_index.min(self.cards.len());
        let end = (start + snapshot.per_view).min(self.cards.len());
        Some(&self.cards[start..end])
    }

    /// Stop the driver and return the final state of the carousel.
    pub async fn shutdown(self) -> Result<CarouselSnapshot, JoinError> {
        self.handle.shutdown();
        let carousel = self.task.await?;
        info!(carousel = %carousel.id(), "Showcase stopped");
        Ok(carousel.snapshot())
    }
}
