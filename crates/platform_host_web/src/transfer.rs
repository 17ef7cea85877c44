//! Browser file picker uploads and anchor-driven downloads.

use platform_host::{DownloadRequest, FileTransferService, TransferFuture, UploadedFile};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use platform_host::{DownloadSource, UploadReadMode};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[derive(Debug, Clone, Copy, Default)]
/// Transfer service using a hidden `<input type="file" multiple>` and `<a download>` links.
pub struct WebFileTransferService;

impl FileTransferService for WebFileTransferService {
    fn pick_files<'a>(&'a self) -> TransferFuture<'a, Result<Vec<UploadedFile>, String>> {
        Box::pin(async move { pick_files().await })
    }

    fn download(&self, request: &DownloadRequest) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            download(request)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
            Err("downloads are only available when compiled for wasm32".to_string())
        }
    }
}

async fn pick_files() -> Result<Vec<UploadedFile>, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("file upload is only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let files = open_picker()?.await;

        let mut reads = Vec::with_capacity(files.len());
        for file in &files {
            reads.push(read_picked_file(file).await);
        }
        Ok(keep_readable(reads, |err| {
            web_sys::console::warn_1(&JsValue::from_str(&format!("upload skipped: {err}")))
        }))
    }
}

/// Keeps the files that were read and reports the rest through `skipped`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn keep_readable(
    reads: Vec<Result<UploadedFile, String>>,
    mut skipped: impl FnMut(&str),
) -> Vec<UploadedFile> {
    reads
        .into_iter()
        .filter_map(|read| read.map_err(|err| skipped(&err)).ok())
        .collect()
}

#[cfg(target_arch = "wasm32")]
/// Hidden picker input and its listeners. Dropping it detaches both and removes the input.
struct PickerInput {
    input: web_sys::HtmlInputElement,
    on_change: Closure<dyn FnMut(web_sys::Event)>,
    on_cancel: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for PickerInput {
    fn drop(&mut self) {
        self.input.set_onchange(None);
        let _ = self
            .input
            .remove_event_listener_with_callback("cancel", self.on_cancel.as_ref().unchecked_ref());
        self.input.remove();
    }
}

#[cfg(target_arch = "wasm32")]
fn open_picker() -> Result<impl std::future::Future<Output = Vec<web_sys::File>>, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let input = document
        .create_element("input")
        .map_err(|err| format!("failed to create file input: {err:?}"))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| "failed to cast file input".to_string())?;
    input.set_type("file");
    input.set_multiple(true);
    input.set_hidden(true);

    let (tx, rx) = oneshot::channel::<Vec<web_sys::File>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let input_for_change = input.clone();
    let change_sender = sender.clone();
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        let mut picked = Vec::new();
        if let Some(files) = input_for_change.files() {
            for idx in 0..files.length() {
                if let Some(file) = files.get(idx) {
                    picked.push(file);
                }
            }
        }
        if let Some(tx) = change_sender.borrow_mut().take() {
            let _ = tx.send(picked);
        }
    }));
    let on_cancel = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        if let Some(tx) = sender.borrow_mut().take() {
            let _ = tx.send(Vec::new());
        }
    }));

    let picker = PickerInput {
        input,
        on_change,
        on_cancel,
    };
    picker
        .input
        .set_onchange(Some(picker.on_change.as_ref().unchecked_ref()));
    picker
        .input
        .add_event_listener_with_callback("cancel", picker.on_cancel.as_ref().unchecked_ref())
        .map_err(|err| format!("failed to watch picker cancel: {err:?}"))?;
    if let Some(body) = document.body() {
        body.append_child(&picker.input)
            .map_err(|err| format!("failed to attach file input: {err:?}"))?;
    }
    picker.input.click();

    Ok(async move {
        let files = rx.await.unwrap_or_default();
        drop(picker);
        files
    })
}

#[cfg(target_arch = "wasm32")]
async fn read_picked_file(file: &web_sys::File) -> Result<UploadedFile, String> {
    let name = file.name();
    let mime_type = file.type_();
    let content = match UploadReadMode::for_file(&name, &mime_type) {
        UploadReadMode::ObjectUrl => web_sys::Url::create_object_url_with_blob(file)
            .map_err(|err| format!("failed to create object url for `{name}`: {err:?}"))?,
        mode => read_with_file_reader(file, mode).await?,
    };
    Ok(UploadedFile {
        name,
        mime_type,
        size: file.size().max(0.0) as u64,
        content,
    })
}

#[cfg(target_arch = "wasm32")]
async fn read_with_file_reader(
    file: &web_sys::File,
    mode: UploadReadMode,
) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read file: {err:?}"))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| "file reader returned non-string result".to_string())
            });
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let file_name = file.name();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err(format!("failed to load `{file_name}`")));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let started = match mode {
        UploadReadMode::DataUrl => reader.read_as_data_url(file),
        _ => reader.read_as_text(file),
    };
    started.map_err(|err| format!("failed to start file read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "file read was interrupted".to_string());
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);
    result?
}

#[cfg(target_arch = "wasm32")]
fn download(request: &DownloadRequest) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;

    let (href, revoke) = match &request.source {
        DownloadSource::Url(url) => (url.clone(), false),
        DownloadSource::Text(text) => (text_blob_url(text)?, true),
        DownloadSource::Empty => (text_blob_url("")?, true),
    };

    let link = document
        .create_element("a")
        .map_err(|err| format!("failed to create download link: {err:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to cast download link".to_string())?;
    link.set_href(&href);
    link.set_download(&request.file_name);

    if let Some(body) = document.body() {
        let _ = body.append_child(&link);
    }
    link.click();
    link.remove();

    if revoke {
        let _ = web_sys::Url::revoke_object_url(&href);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn text_blob_url(text: &str) -> Result<String, String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| format!("failed to create blob: {err:?}"))?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|err| format!("failed to create object url: {err:?}"))
}
