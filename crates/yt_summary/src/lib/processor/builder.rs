use crate::{yt::TranscriptFetcher, Summarizer, SummaryPipeline};

pub struct SummaryPipelineBuilder<T = (), S = ()> {
    transcript_fetcher: T,
    summarizer: S,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            transcript_fetcher: (),
            summarizer: (),
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> SummaryPipelineBuilder<T, S> {
    pub fn transcript_fetcher<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: T2,
    ) -> SummaryPipelineBuilder<T2, S> {
        SummaryPipelineBuilder {
            transcript_fetcher,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<T, S2> {
        SummaryPipelineBuilder {
            transcript_fetcher: self.transcript_fetcher,
            summarizer,
        }
    }
}

impl<T, S> SummaryPipelineBuilder<T, S>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<T, S> {
        SummaryPipeline::new(self.transcript_fetcher, self.summarizer)
    }
}
