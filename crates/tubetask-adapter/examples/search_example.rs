/*
[INPUT]:  Search query and YOUTUBE_API_KEY environment variable
[OUTPUT]: Printed search results
[POS]:    Examples - video search query
[UPDATE]: When the search surface changes
*/

use tubetask_adapter::*;

/// Example: Search for videos against the live API
///
/// Requires a data API key in the YOUTUBE_API_KEY environment variable.
#[tokio::main]
async fn main() {
    println!("=== Video Search Example ===\n");

    let api_key = match std::env::var("YOUTUBE_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set YOUTUBE_API_KEY to run this example");
            return;
        }
    };

    let client = match VideoApiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let query = "lofi hip hop radio";
    println!("Searching for \"{}\"...", query);
    match client.search(query, &api_key).await {
        Ok(videos) => {
            println!("✓ {} results\n", videos.len());
            for video in &videos {
                println!("  [{}] {}", video.id, video.title);
                println!("      {} | {}", video.channel_title, video.published_at);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Search example complete");
}
