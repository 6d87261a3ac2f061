/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP transport with timeout and retry
pub mod http;
/// Request bodies sent to the API
pub mod requests;
/// Generic JSON response wrapper
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
/// Parameter validation helpers
pub mod utils;
