//! Sample content for a first visit.

use crate::{
    error::StoreError,
    model::{Folder, NewFile},
    snapshot::IdAllocator,
};

fn push_file(
    folder: &mut Folder,
    ids: &mut IdAllocator,
    file: NewFile,
    now_ms: u64,
) -> Result<(), StoreError> {
    let name = file.name.clone();
    folder
        .files
        .push(file.into_entry(ids.next_file_id()?, name, now_ms));
    Ok(())
}

/// Fills `root` with `Documents` and `Projects/{Frontend,Backend}` and marks it loaded.
///
/// Nothing is attached to `root` when the counters run out.
pub(crate) fn seed(root: &mut Folder, ids: &mut IdAllocator, now_ms: u64) -> Result<(), StoreError> {
    let mut documents = Folder::new(ids.next_folder_id()?, "Documents");
    let mut projects = Folder::new(ids.next_folder_id()?, "Projects");

    push_file(
        &mut documents,
        ids,
        NewFile::named("readme.txt")
            .with_type("text/plain")
            .with_size(156)
            .with_content(
                "This is the demo readme.txt file.\nYou can edit, rename and delete it.",
            )
            .with_description("Main documentation file"),
        now_ms,
    )?;
    push_file(
        &mut documents,
        ids,
        NewFile::named("todo.txt")
            .with_type("text/plain")
            .with_size(89)
            .with_content("1. Finish the project\n2. Write the documentation\n3. Run the tests")
            .with_description("Task list"),
        now_ms,
    )?;

    let mut frontend = Folder::new(ids.next_folder_id()?, "Frontend");
    let mut backend = Folder::new(ids.next_folder_id()?, "Backend");

    push_file(
        &mut frontend,
        ids,
        NewFile::named("styles.css")
            .with_type("text/css")
            .with_size(1024)
            .with_content("/* Demo CSS file */\nbody { font-family: Arial; color: #333; }")
            .with_description("Application styles"),
        now_ms,
    )?;
    push_file(
        &mut backend,
        ids,
        NewFile::named("api.ts")
            .with_type("text/plain")
            .with_size(2048)
            .with_content(
                "// Demo TypeScript file\nexport interface User { id: string; name: string; }",
            )
            .with_description("API interfaces"),
        now_ms,
    )?;

    projects.folders.push(frontend);
    projects.folders.push(backend);
    root.folders.push(documents);
    root.folders.push(projects);
    root.loaded = true;
    Ok(())
}
