use anyhow::Result;
use console::{Term, style};
use log::error;
use videolens_core::{
    AnswerModel, Phase, RetrievalResult, Role, Session, VideoIndex, VideoRecord,
    add_videos_to_index, find_related_content, find_related_content_in_collection,
    generate_answer_from_context, player_url,
};

use crate::ui;

const ALL_VIDEOS: &str = "All videos";

const SERVICES: [(&str, &str); 10] = [
    ("LLM Summary", "Summarized Response"),
    ("Stream Full Video", "Stream Video"),
    ("Search and Watch Clip", "Watch Related Short Clips"),
    ("Get Transcript", "Video Transcript"),
    ("Add Subtitles", "Watch with Subtitles"),
    ("Generate Thumbnail", "Create Video Thumbnail"),
    ("Delete Video", "Delete the Video"),
    ("Delete All", "Delete All Videos"),
    ("Check Collection", "List Saved Videos"),
    ("Quit", "End the Session"),
];

/// Interactive session orchestrator: routes user actions to the gateways
/// and renders results. One synchronous call chain per action.
pub struct App<V, M> {
    index: V,
    model: M,
    session: Session,
    collection_name: Option<String>,
    urls: Vec<String>,
}

impl<V: VideoIndex, M: AnswerModel> App<V, M> {
    pub fn new(
        index: V,
        model: M,
        session: Session,
        collection_name: Option<String>,
        urls: Vec<String>,
    ) -> Self {
        Self {
            index,
            model,
            session,
            collection_name,
            urls,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let term = Term::stdout();
        loop {
            let keep_going = match self.session.phase() {
                Phase::CollectingUrls => self.collect_library(&term).await?,
                Phase::UrlsSaved => self.service_menu(&term).await?,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// URL-collection phase: gather a collection name and URL list, then
    /// hand the batch to the ingestion gateway. Returns false on quit.
    async fn collect_library(&mut self, term: &Term) -> Result<bool> {
        let name = match self.collection_name.take() {
            Some(name) if !name.trim().is_empty() => name,
            _ => loop {
                let line = ui::prompt_line(term, "Enter video collection name (q to quit):")?;
                if line == "q" {
                    return Ok(false);
                }
                if !line.is_empty() {
                    break line;
                }
                ui::warning("Please provide the collection name to continue.");
            },
        };

        for url in &self.urls {
            ui::success(&format!("Video URL {url} added!"));
        }
        loop {
            let line = ui::prompt_line(term, "Paste a video URL (empty line to finish):")?;
            if line.is_empty() {
                if self.urls.is_empty() {
                    ui::warning("Add at least one video URL before saving the library.");
                    continue;
                }
                break;
            }
            self.urls.push(line.clone());
            ui::success(&format!("Video URL {line} added!"));
            ui::info("Feel free to include additional URLs, or press enter to save the library.");
        }

        let spinner = ui::create_spinner("Uploading Videos and Indexing...");
        let outcome = add_videos_to_index(&self.index, &name, &self.urls).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(outcome) => {
                if self.session.store_library(outcome.collection, outcome.videos) {
                    ui::success("Videos uploaded and indexed successfully!");
                    self.urls.clear();
                } else {
                    ui::warning("Nothing was uploaded. Please try again.");
                }
            }
            Err(e) => {
                error!("Ingestion failed: {e}");
                ui::failure("Error uploading videos and indexing. Please try again.");
            }
        }
        Ok(true)
    }

    /// Service dispatch. Failures are logged and rendered without ending
    /// the session. Returns false on quit.
    async fn service_menu(&mut self, term: &Term) -> Result<bool> {
        println!();
        println!("{}", style("Select a Service:").bold());
        for (i, (name, caption)) in SERVICES.iter().enumerate() {
            println!(
                "  {} {} {}",
                style(format!("{}.", i + 1)).cyan(),
                name,
                style(format!("({caption})")).dim()
            );
        }

        let choice = ui::prompt_line(term, "Service number:")?;
        let outcome = match choice.as_str() {
            "1" => self.chat(term).await,
            "2" => self.stream(term).await,
            "3" => self.watch_clip(term).await,
            "4" => self.transcript(term).await,
            "5" => self.subtitles(term).await,
            "6" => self.thumbnail(term).await,
            "7" => self.delete_one(term).await,
            "8" => self.delete_all(term).await,
            "9" => self.check_collection().await,
            "10" | "q" => return Ok(false),
            "" => Ok(()),
            other => {
                ui::warning(&format!("Unknown service: {other}"));
                Ok(())
            }
        };

        if let Err(e) = outcome {
            error!("Service failed: {e}");
            ui::failure(&e.to_string());
        }
        Ok(true)
    }

    async fn chat(&mut self, term: &Term) -> Result<()> {
        let mut options = vec![ALL_VIDEOS.to_string()];
        options.extend(self.session.videos().iter().map(|v| v.name.clone()));
        let name_refs: Vec<&str> = options.iter().map(String::as_str).collect();
        let Some(target) = ui::select_one(term, "Select what to chat with", &name_refs)? else {
            return Ok(());
        };
        let target = target.to_string();
        let video_id = self.session.video_id(&target).cloned();
        let collection = self.session.collection().cloned();

        for turn in self.session.history(&target) {
            print_turn(turn.role, &turn.message);
        }

        loop {
            let query =
                ui::prompt_line(term, "What would you like to know? (empty line to go back)")?;
            if query.is_empty() {
                return Ok(());
            }
            self.session.push_turn(&target, Role::User, query.clone());

            let spinner = ui::create_spinner("Analyzing...");
            let retrieved = match &video_id {
                Some(id) => find_related_content(&self.index, id, &query).await,
                None => match &collection {
                    Some(collection) => {
                        find_related_content_in_collection(&self.index, collection, &query).await
                    }
                    None => RetrievalResult::empty(),
                },
            };
            let answer = generate_answer_from_context(&self.model, &query, &retrieved.text).await;
            spinner.finish_and_clear();

            match answer {
                Ok(answer) => {
                    print_turn(Role::Assistant, &answer);
                    self.session.push_turn(&target, Role::Assistant, answer);
                    match &retrieved.details {
                        Some(details) => {
                            println!("{}", style("Context and Details").dim().underlined());
                            println!(
                                "{}",
                                style(format!("{}: {}", details.video_title, details.text)).dim()
                            );
                        }
                        None => ui::info("No matching context was found in the video index."),
                    }
                }
                Err(e) => {
                    error!("Answer generation failed: {e}");
                    ui::failure(&e.to_string());
                }
            }
        }
    }

    async fn stream(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL to stream it")? else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Preparing stream...");
        let stream = self.index.generate_stream(&video.id).await;
        spinner.finish_and_clear();
        ui::success(&format!(
            "Watch {} at: {}",
            video.name,
            player_url(&stream?)
        ));
        Ok(())
    }

    async fn watch_clip(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL to stream a clip from")? else {
            return Ok(());
        };
        let topic = ui::prompt_line(term, "Enter the topic to get clips relevant to it:")?;
        if topic.is_empty() {
            return Ok(());
        }

        let spinner = ui::create_spinner("Searching for matching clips...");
        let shots = self.index.search_video(&video.id, &topic).await;
        spinner.finish_and_clear();
        let shots = shots?;

        if shots.is_empty() {
            ui::info(
                "No shorts matching the specified topic were found. Please try a different topic.",
            );
            return Ok(());
        }
        for shot in &shots {
            let timing = format!(
                "[{} - {}]",
                ui::format_timestamp(shot.start),
                ui::format_timestamp(shot.end)
            );
            match &shot.stream_url {
                Some(stream) => println!(
                    "  {} {} {}",
                    style(timing).cyan(),
                    shot.text,
                    style(player_url(stream)).dim()
                ),
                None => println!("  {} {}", style(timing).cyan(), shot.text),
            }
        }
        Ok(())
    }

    async fn transcript(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL to get transcript from")? else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Transcribing video...");
        let text = self.index.transcript_text(&video.id).await;
        spinner.finish_and_clear();
        ui::info(&format!("Transcript for {} is:", video.name));
        println!("{}", text?);
        Ok(())
    }

    async fn subtitles(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL to add subtitles to")? else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Adding subtitles to video...");
        let stream = self.index.add_subtitle(&video.id).await;
        spinner.finish_and_clear();
        ui::success(&format!(
            "Watch {} with subtitles at: {}",
            video.name,
            player_url(&stream?)
        ));
        Ok(())
    }

    async fn thumbnail(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL to generate a thumbnail for")? else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Generating thumbnail...");
        let url = self.index.generate_thumbnail(&video.id).await;
        spinner.finish_and_clear();
        ui::success(&format!("Thumbnail for {}: {}", video.name, url?));
        Ok(())
    }

    async fn delete_one(&mut self, term: &Term) -> Result<()> {
        let Some(video) = self.pick_video(term, "Select URL of the video you want to delete")?
        else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Deleting video...");
        let deleted = self.index.delete(&video.id).await;
        spinner.finish_and_clear();
        deleted?;
        self.session.remove_video(&video.name);
        ui::success("Video deleted successfully from the index.");
        Ok(())
    }

    async fn delete_all(&mut self, term: &Term) -> Result<()> {
        let confirm = ui::prompt_line(term, "Type 'yes' to delete all videos:")?;
        if confirm != "yes" {
            return Ok(());
        }
        let Some(collection) = self.session.collection().cloned() else {
            return Ok(());
        };

        let spinner = ui::create_spinner("Deleting all videos...");
        let deleted = async {
            for video in self.index.list_videos(&collection).await? {
                self.index.delete(&video.id).await?;
            }
            Ok::<_, videolens_core::VideolensError>(())
        }
        .await;
        spinner.finish_and_clear();
        deleted?;

        self.session.reset();
        ui::success("All videos deleted successfully from the index.");
        Ok(())
    }

    async fn check_collection(&mut self) -> Result<()> {
        let Some(collection) = self.session.collection().cloned() else {
            return Ok(());
        };
        let spinner = ui::create_spinner("Fetching collection...");
        let videos = self.index.list_videos(&collection).await;
        spinner.finish_and_clear();
        let videos = videos?;
        if videos.is_empty() {
            ui::info("No videos in the collection.");
            return Ok(());
        }
        println!("{}", style("Collection list:").bold());
        for video in videos {
            println!("  {} {}", style(&video.id).dim(), video.name);
        }
        Ok(())
    }

    fn pick_video(&self, term: &Term, heading: &str) -> Result<Option<VideoRecord>> {
        let names: Vec<&str> = self.session.videos().iter().map(|v| v.name.as_str()).collect();
        if names.is_empty() {
            ui::info("No videos in the collection.");
            return Ok(None);
        }
        match ui::select_one(term, heading, &names)? {
            Some(name) => Ok(self
                .session
                .videos()
                .iter()
                .find(|v| v.name == name)
                .cloned()),
            None => Ok(None),
        }
    }
}

fn print_turn(role: Role, message: &str) {
    let label = match role {
        Role::User => style("you:").cyan().bold(),
        Role::Assistant => style("bot:").green().bold(),
    };
    println!("{} {}", label, message);
}
