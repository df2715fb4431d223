use crate::core::deferred::FetchState;
use crate::core::list::OrderedList;
use crate::core::report;
use crate::domain::model::Member;
use crate::domain::ports::{ConfigProvider, PostSource, ReportStore};
use crate::utils::error::Result;

pub struct RosterEngine<P: PostSource, S: ReportStore, C: ConfigProvider> {
    source: P,
    store: S,
    config: C,
    roster: OrderedList<Member>,
}

impl<P: PostSource, S: ReportStore, C: ConfigProvider> RosterEngine<P, S, C> {
    pub fn new(source: P, store: S, config: C) -> Self {
        let mut roster = OrderedList::new(config.members().to_vec());

        if roster.is_empty() {
            tracing::warn!("No members configured, seeding sample roster");
            for member in sample_members() {
                roster.push(member);
            }
        }

        Self {
            source,
            store,
            config,
            roster,
        }
    }

    pub fn roster(&self) -> &OrderedList<Member> {
        &self.roster
    }

    /// Appends a member and logs their greeting.
    pub fn check_in(&mut self, member: Member) {
        tracing::info!("{}", member.login_message());
        self.roster.push(member);
    }

    /// Removes the most recently joined member. Checking out of an empty
    /// roster is a named error.
    pub fn check_out(&mut self) -> Result<Member> {
        let member = self.roster.pop()?;
        tracing::info!("{} left the roster", member.name());
        Ok(member)
    }

    /// Greets every member, prints the roster, fetches the featured post,
    /// and saves the CSV report. Returns the report path.
    ///
    /// A failed fetch is logged as a failed state and does not abort the
    /// run; the report does not depend on it.
    pub async fn run(&self) -> Result<String> {
        tracing::info!(
            "Starting roster run: {} ({})",
            self.config.roster_name(),
            self.config.language().code()
        );

        for member in self.roster.iter() {
            tracing::info!("{}", member.login_message());
        }
        self.roster.print();

        tracing::info!("Featured post: {}", FetchState::Loading.status_line());
        let state = match self.source.fetch(self.config.featured_post()).await {
            Ok(post) => FetchState::Success { data: post.title },
            Err(e) => FetchState::Failed {
                message: e.to_string(),
            },
        };
        tracing::info!("Featured post: {}", state.status_line());

        let csv_output = report::render_csv(self.roster.as_slice())?;
        let report_path = self
            .store
            .save(self.config.report_filename(), csv_output.as_bytes())
            .await?;
        tracing::info!("Report saved to: {}", report_path);

        Ok(report_path)
    }
}

fn sample_members() -> Vec<Member> {
    vec![
        Member::Admin {
            name: "kwon".to_string(),
            kick_count: 3,
        },
        Member::Regular {
            name: "park".to_string(),
            point: 120,
        },
        Member::Guest {
            name: "choi".to_string(),
            visit_count: 7,
        },
    ]
}
