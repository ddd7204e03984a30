use crate::shared::observation::Observation;

/// Domain interface for a stream of per-frame observations.
///
/// Live capture pipelines and recorded replays both sit behind this seam;
/// the engine itself only ever sees one `Observation` at a time.
pub trait ObservationSource: Send {
    fn observations(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Observation, Box<dyn std::error::Error>>> + '_>;
}
