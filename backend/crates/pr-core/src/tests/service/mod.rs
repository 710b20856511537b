mod access_policy;
mod create;
mod read;
mod upload_picture;
