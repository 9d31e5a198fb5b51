use std::sync::Arc;

use crate::{
    entities::project::ProjectResponse,
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::media::MediaLinks,
};

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn list_projects(&self, links: &MediaLinks) -> Result<Vec<ProjectResponse>, AppError> {
        let projects = self.project_repo.list_projects().await?;

        Ok(projects
            .into_iter()
            .map(|project| ProjectResponse::from_project(project, links))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::project::Project, repositories::project::MockProjectRepository};

    #[actix_rt::test]
    async fn badges_and_order_are_preserved() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().times(1).returning(|| {
            Ok(vec![
                Project {
                    id: 1,
                    title: "Portfolio".into(),
                    description: "This site".into(),
                    image: "projects/portfolio.png".into(),
                    github: "https://github.com/meet/portfolio".into(),
                    demo: None,
                    badges: vec!["React".into(), "Django".into(), "Tailwind".into()],
                },
                Project {
                    id: 2,
                    title: "Chat".into(),
                    description: "Realtime chat".into(),
                    image: "".into(),
                    github: "https://github.com/meet/chat".into(),
                    demo: Some("https://chat.example".into()),
                    badges: vec![],
                },
            ])
        });

        let handler = ProjectHandler::new(Arc::new(repo));
        let projects = handler.list_projects(&MediaLinks::new("/media/", None)).await.unwrap();

        assert_eq!(projects[0].title, "Portfolio");
        assert_eq!(projects[0].badges, vec!["React", "Django", "Tailwind"]);
        assert_eq!(projects[0].image, "/media/projects/portfolio.png");
        assert_eq!(projects[0].demo, None);
        assert_eq!(projects[1].demo.as_deref(), Some("https://chat.example"));
        assert_eq!(projects[1].image, "");
    }
}
