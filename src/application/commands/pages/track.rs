use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::page::PageId,
};

pub struct TrackVisitCommand {
    pub page_id: i64,
}

impl PageCommandService {
    /// Record a click-through. The caller redirects to the returned URL.
    pub async fn track_visit(
        &self,
        command: TrackVisitCommand,
    ) -> ApplicationResult<Option<PageDto>> {
        let id = PageId::new(command.page_id)?;
        let visited = self.save_service.record_visit(id).await?;
        Ok(visited.map(Into::into))
    }
}
