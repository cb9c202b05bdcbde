use std::io::Cursor;

use chrono::{NaiveTime, TimeZone, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::post::Post;
use crate::view::full_link;

/* Example
<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">

<channel>
  <title>My blog</title>
  <link>https://example.org</link>
  <description>Notes about things</description>
  <managingEditor>Jane Doe</managingEditor>
  <item>
    <title>Hello, blogchain</title>
    <link>https://example.org/hello-world.html</link>
    <guid isPermaLink="true">https://example.org/hello-world.html</guid>
    <description><![CDATA[<h1>Hello</h1>]]></description>
    <pubDate>Sun, 24 Dec 2023 00:00:00 +0000</pubDate>
  </item>
</channel>

</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub ch_author: &'a str,
}


impl<'a> RssChannel<'a> {
    /// Renders one item per post, in the given order. Callers pass visible
    /// posts only.
    pub fn render<'p, I>(&self, posts: I) -> quick_xml::Result<Vec<u8>>
        where I: IntoIterator<Item=&'p Post>
    {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;
        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;
        if !self.ch_author.is_empty() {
            push_text(&mut writer, "managingEditor", self.ch_author)?;
        }

        for post in posts {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", post.title.as_str())?;

            let link = full_link(self.ch_link, post.slug.as_str());
            push_text(&mut writer, "link", link.as_str())?;

            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(link.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_cdata(&mut writer, "description", post.rendered.as_str())?;

            // Posts only carry a day, published at midnight UTC
            let dt = Utc.from_utc_datetime(&post.date.and_time(NaiveTime::MIN));
            push_text(&mut writer, "pubDate", &dt.to_rfc2822())?;

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    if text.contains("]]>") {
        let new_text = text.replace("]]>", "]] >");
        writer.write_event(Event::CData(BytesCData::new(&new_text)))?;
    } else {
        writer.write_event(Event::CData(BytesCData::new(text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
