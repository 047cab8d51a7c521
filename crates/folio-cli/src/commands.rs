use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, info_span};

use folio_cli::logging::redact_value;
use folio_cli::summary::{carousel_table, categories_table, errors_table, print_gallery};
use folio_contact::{ContactForm, ContactSession, SUCCESS_MESSAGE, SimulatedSubmitter};
use folio_gallery::{Carousel, Gallery, PageVariant};
use folio_model::{Catalog, CategoryTable};

use crate::cli::{CatalogArgs, CategoriesArgs, ContactArgs, PageArg, ProjectsArgs, ShowArgs};

/// Outcome of the contact command.
pub enum ContactOutcome {
    Sent,
    /// Validation failed; the errors were printed.
    Rejected,
}

pub fn run_projects(args: &ProjectsArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let table = load_categories(&args.categories)?;
    let page = match args.page {
        PageArg::Home => PageVariant::Home,
        PageArg::Projects => PageVariant::Projects,
    };
    let config = page
        .config(&table)
        .with_context(|| format!("configure {page} page"))?;
    let mut gallery = Gallery::new(&catalog, config);
    if let Some(category) = &args.category {
        if !gallery.config().categories().contains(category) {
            bail!("unknown category {category:?} for the {page} page");
        }
        gallery.set_category(category.as_str());
    }
    gallery.set_search_text(args.search.as_str());
    print_gallery(&gallery);
    Ok(())
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let table = load_categories(args)?;
    println!("{}", categories_table(&table));
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let project = catalog
        .get(&args.id)
        .ok_or_else(|| anyhow!("no project with id {:?}", args.id))?;
    let mut carousel = Carousel::new();
    if !carousel.open(project) {
        bail!("project {:?} has no images to show", project.id);
    }
    for step in &args.steps {
        debug!(%step, "carousel step");
        step.apply(&mut carousel);
    }
    println!("{}", project.title);
    println!("{}", project.description);
    if !project.technologies.is_empty() {
        println!("Technologies: {}", project.technologies.join(", "));
    }
    if let Some(url) = &project.demo_url {
        println!("Demo: {url}");
    }
    if let Some(url) = &project.github_url {
        println!("Source: {url}");
    }
    println!("{}", carousel_table(&carousel));
    if let (Some(index), Some(image)) = (carousel.image_index(), carousel.current_image()) {
        println!("Image {} of {}: {image}", index + 1, carousel.image_count());
    }
    Ok(())
}

pub fn run_contact(args: &ContactArgs) -> Result<ContactOutcome> {
    let span = info_span!("contact", email = %redact_value(&args.email));
    let _guard = span.enter();
    let mut session = ContactSession::with_form(ContactForm::new(
        args.name.as_str(),
        args.email.as_str(),
        args.subject.as_str(),
        args.message.as_str(),
    ));
    if !session.validate() {
        println!("{}", errors_table(session.errors()));
        return Ok(ContactOutcome::Rejected);
    }
    let submitter = SimulatedSubmitter::new(Duration::from_millis(args.delay_ms));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start async runtime")?;
    info!(delay_ms = args.delay_ms, "sending contact message");
    runtime
        .block_on(session.submit(&submitter))
        .context("send contact message")?;
    println!("{SUCCESS_MESSAGE}");
    Ok(ContactOutcome::Sent)
}

fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => Catalog::builtin().context("load built-in catalog"),
    }
}

fn load_categories(args: &CategoriesArgs) -> Result<CategoryTable> {
    match &args.categories {
        Some(path) => CategoryTable::load(path)
            .with_context(|| format!("load categories {}", path.display())),
        None => CategoryTable::builtin().context("load built-in categories"),
    }
}
